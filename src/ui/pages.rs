//! Pages module
//! Full-page views for the registration desk

pub mod checkin;
pub mod draw;
pub mod register;
