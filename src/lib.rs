pub mod app;
pub mod components;
pub mod config;
pub mod effects;
pub mod filters;
pub mod forms;
pub mod helpers;
pub mod lightbox;
pub mod localization;
pub mod menu;
pub mod news;
pub mod notification;
pub mod scroll;
pub mod theme;
