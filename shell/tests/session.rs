//! Drives the shell `App` against a live mock server.

use std::net::SocketAddr;

use todo_core::{Todo, TodoService};
use todo_shell::{App, Intent, ShellError};

fn start_server() -> SocketAddr {
    let std_listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
    let addr = std_listener.local_addr().unwrap();
    std_listener.set_nonblocking(true).unwrap();

    std::thread::spawn(move || {
        let rt = tokio::runtime::Builder::new_current_thread()
            .enable_all()
            .build()
            .unwrap();
        rt.block_on(async {
            let listener = tokio::net::TcpListener::from_std(std_listener).unwrap();
            mock_server::run(listener).await
        })
        .unwrap();
    });

    addr
}

fn buy_milk(is_done: bool) -> Todo {
    Todo {
        id: 1,
        name: "Buy milk".to_string(),
        is_done,
    }
}

#[test]
fn gestures_refresh_the_checklist() {
    let service = TodoService::connect(&format!("http://{}", start_server()));
    let mut app = App::new(&service);
    app.refresh().unwrap();
    assert!(app.snapshot().is_empty());

    app.dispatch(&Intent::Submit("Buy milk".into())).unwrap();
    assert_eq!(app.snapshot().items(), &[buy_milk(false)]);

    app.dispatch(&Intent::Toggle(1)).unwrap();
    assert_eq!(app.snapshot().items(), &[buy_milk(true)]);

    app.dispatch(&Intent::Delete(1)).unwrap();
    assert!(app.snapshot().is_empty());
}

#[test]
fn stale_id_is_refused_without_a_call() {
    let service = TodoService::connect(&format!("http://{}", start_server()));
    let mut app = App::new(&service);

    // The item exists remotely but this app has not refreshed yet.
    service.create("Walk dog").unwrap();
    let err = app.dispatch(&Intent::Delete(1)).unwrap_err();
    assert!(matches!(err, ShellError::UnknownItem(1)));
    assert_eq!(service.list().unwrap().len(), 1);
}

#[test]
fn scripted_session_output() {
    let service = TodoService::connect(&format!("http://{}", start_server()));
    let mut app = App::new(&service);

    let input = "add Buy milk\nadd Walk dog\ntoggle 2\nrm 1\nlist\nquit\n";
    let mut out = Vec::new();
    let mut err = Vec::new();
    app.run_interactive(input.as_bytes(), &mut out, &mut err).unwrap();

    let out = String::from_utf8(out).unwrap();
    let last_render = out.rsplit("> ").nth(1).unwrap();
    assert_eq!(last_render, "[x] #2 Walk dog\n");
    assert!(err.is_empty());
}
