use shipgpt_admin::client;

fn main() {
    dioxus::launch(client::App);
}
