// lib.rs - Library root for the sk editor core

pub mod cli;
pub mod command;
pub mod config;
pub mod cursor;
pub mod document;
pub mod editor;
pub mod event_bus;
pub mod input;
pub mod ui;
pub mod view;
pub mod viewport;
