// ABOUTME: Re-exports helper modules for capyrun-cli
// ABOUTME: Provides JSON output shaping and lap target parsing

pub mod output;
pub mod targets;
