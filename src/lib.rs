//! DCS Guide: chat-widget backend for the Bates College Digital and
//! Computational Studies department.

pub mod catalog;
pub mod chat;
pub mod config;
pub mod error;
pub mod notify;
pub mod questionnaire;
pub mod server;
