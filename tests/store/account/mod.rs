mod create_account;
mod fetch_account_details;
mod fetch_accounts;
mod set_account_status;
