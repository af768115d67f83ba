mod create_ship_with_documents;
mod delete_document;
mod delete_ship;
mod set_ship_status;
mod upload_document;
