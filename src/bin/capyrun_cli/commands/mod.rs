// ABOUTME: Re-exports command modules for capyrun-cli
// ABOUTME: Provides the single-file summary and multi-file trends commands

pub mod summarize;
pub mod trends;
