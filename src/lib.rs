//! Hotenv - platform-prefixed .env file generation for Next.js and Expo monorepos
//!
//! Hotenv keeps environment variables in uncommitted `.env*.local` files and
//! generates version-control-safe `.env` files from them: only variables
//! marked public survive, and the `_PUBLIC_` convention fans out into the
//! prefix each runtime expects (`NEXT_PUBLIC_` and `EXPO_PUBLIC_`).
//!
//! ## Module Structure
//!
//! - `cli`: Command-line interface layer (argument parsing and dispatch)
//! - `config`: Optional `.hotenvrc.json` project configuration
//! - `engine`: Core generation engine (scan, transform, tag, plan, execute)
//! - `report`: Console output formatting

pub mod cli;
pub mod config;
pub mod engine;
pub mod report;
