#[path = "seclab_server/types.rs"]
mod types;
#[path = "seclab_server/users.rs"]
mod users;
#[path = "seclab_server/notes_repo.rs"]
mod notes_repo;
#[path = "seclab_server/http_error.rs"]
mod http_error;
#[path = "seclab_server/access.rs"]
mod access;
#[path = "seclab_server/handlers_auth.rs"]
mod handlers_auth;
#[path = "seclab_server/handlers_notes.rs"]
mod handlers_notes;
#[path = "seclab_server/routes.rs"]
mod routes;
#[path = "seclab_server/runtime.rs"]
mod runtime;

#[tokio::main]
async fn main() {
    if let Err(err) = runtime::run().await {
        eprintln!("{:#}", err);
        std::process::exit(1);
    }
}
