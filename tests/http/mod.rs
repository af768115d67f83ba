mod authorization;
mod errors;
mod requests;
