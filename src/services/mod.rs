pub mod webhook_processor;
