mod forgot_password;
mod login;
