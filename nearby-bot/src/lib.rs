//! Nearby station bot.
//!
//! A LINE webhook server that answers a shared location with a carousel
//! of the nearest bike-share stations and their free slots.

pub mod config;
pub mod dataset;
pub mod domain;
pub mod handler;
pub mod line;
pub mod ranker;
pub mod reply;
pub mod web;
