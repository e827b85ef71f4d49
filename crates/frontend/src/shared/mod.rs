pub mod api_utils;
pub mod banner;
pub mod components;
pub mod config;
pub mod date_utils;
pub mod form;
pub mod icons;
pub mod remote;
