mod account;
mod auth;
mod ship;
