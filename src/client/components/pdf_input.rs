use dioxus::prelude::*;
use dioxus_logger::tracing;

use crate::{
    client::{
        store::notification::{notify_error, NotificationState},
        util::upload::check_size,
    },
    error::Error,
};

/// A PDF read from the browser file picker
#[derive(Clone, Debug, PartialEq)]
pub struct PickedPdf {
    pub file_name: String,
    pub bytes: Vec<u8>,
}

/// File picker limited to PDFs.
///
/// Files above `limit` are reported as an error toast and never read into memory.
#[component]
pub fn PdfInput(
    limit: u64,
    #[props(default)] multiple: bool,
    #[props(default)] disabled: bool,
    on_pick: EventHandler<PickedPdf>,
) -> Element {
    let mut notifications = use_context::<Signal<NotificationState>>();

    let pick = move |evt: FormEvent| async move {
        for file in evt.files() {
            let file_name = file.name();

            if let Err(err) = check_size(file.size(), limit) {
                notify_error(&mut notifications, &Error::from(err));
                continue;
            }

            match file.read_bytes().await {
                Ok(bytes) => on_pick.call(PickedPdf {
                    file_name,
                    bytes: bytes.to_vec(),
                }),
                Err(err) => {
                    tracing::warn!(file_name = %file_name, "Failed to read picked file: {}", err);
                    notify_error(&mut notifications, &Error::Storage(err.to_string()));
                }
            }
        }
    };

    rsx! {
        input {
            class: "file-input file-input-bordered w-full",
            r#type: "file",
            accept: ".pdf,application/pdf",
            multiple,
            disabled,
            onchange: pick,
        }
    }
}
