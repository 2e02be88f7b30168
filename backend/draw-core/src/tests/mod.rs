mod config;
mod i18n;
mod selector;
mod store;
