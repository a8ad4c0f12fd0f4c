//! Seed-to-delete scenario against the live server.
//!
//! Starts the server on a random port with its seed data, then drives every
//! client operation over real HTTP using ureq.

use todo_core::{
    ApiError, CreateTodo, HttpMethod, HttpRequest, HttpResponse, Todo, TodoClient, UpdateTodo,
};

/// Execute an `HttpRequest` using ureq and return an `HttpResponse`.
///
/// 4xx/5xx responses come back as data so the client does the status mapping.
fn execute(req: HttpRequest) -> HttpResponse {
    let agent = ureq::Agent::config_builder()
        .http_status_as_error(false)
        .build()
        .new_agent();

    let mut response = match (req.method, req.body) {
        (HttpMethod::Get, _) => agent.get(&req.url).call(),
        (HttpMethod::Delete, _) => agent.delete(&req.url).call(),
        (HttpMethod::Post, Some(body)) => agent
            .post(&req.url)
            .content_type("application/json")
            .send(body.as_bytes()),
        (HttpMethod::Post, None) => agent.post(&req.url).send_empty(),
        (HttpMethod::Put, Some(body)) => agent
            .put(&req.url)
            .content_type("application/json")
            .send(body.as_bytes()),
        (HttpMethod::Put, None) => agent.put(&req.url).send_empty(),
    }
    .expect("HTTP transport error");

    let status = response.status().as_u16();
    let body = response.body_mut().read_to_string().unwrap_or_default();

    HttpResponse {
        status,
        headers: Vec::new(),
        body,
    }
}

fn start_server() -> TodoClient {
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
            let store = todo_server::shared(todo_server::TodoStore::seeded());
            todo_server::run(listener, store).await
        })
        .unwrap();
    });

    TodoClient::new(&format!("http://{addr}/api"))
}

fn ids(todos: &[Todo]) -> Vec<i64> {
    todos.iter().map(|todo| todo.id).collect()
}

#[test]
fn seed_create_update_delete_lifecycle() {
    let client = start_server();

    // Step 1: list, seed records only.
    let todos = client.parse_list_todos(execute(client.build_list_todos())).unwrap();
    assert_eq!(ids(&todos), vec![1, 2, 3]);

    // Step 2: create takes the next id.
    let req = client.build_create_todo(&CreateTodo::new("Buy milk")).unwrap();
    let created = client.parse_create_todo(execute(req)).unwrap();
    assert_eq!(created.id, 4);
    assert!(!created.completed);

    // Step 3: mark completed, title untouched.
    let update = UpdateTodo {
        title: None,
        completed: Some(true),
    };
    let req = client.build_update_todo(4, &update).unwrap();
    let updated = client.parse_update_todo(execute(req)).unwrap();
    assert_eq!(
        updated,
        Todo {
            id: 4,
            title: "Buy milk".to_string(),
            completed: true,
        }
    );

    // Step 4: delete a seed record.
    client.parse_delete_todo(execute(client.build_delete_todo(2))).unwrap();

    // Step 5: delete again is NotFound.
    let err = client
        .parse_delete_todo(execute(client.build_delete_todo(2)))
        .unwrap_err();
    assert!(matches!(err, ApiError::NotFound));

    // Step 6: updating a missing id is NotFound.
    let req = client.build_update_todo(2, &UpdateTodo::default()).unwrap();
    let err = client.parse_update_todo(execute(req)).unwrap_err();
    assert!(matches!(err, ApiError::NotFound));

    // Step 7: list keeps insertion order.
    let todos = client.parse_list_todos(execute(client.build_list_todos())).unwrap();
    assert_eq!(ids(&todos), vec![1, 3, 4]);
}

#[test]
fn missing_title_is_a_validation_error() {
    let client = start_server();

    let req = HttpRequest {
        method: HttpMethod::Post,
        url: format!("{}/todos", client.base_url()),
        headers: vec![("content-type".to_string(), "application/json".to_string())],
        body: Some(r#"{"completed":true}"#.to_string()),
    };
    let err = client.parse_create_todo(execute(req)).unwrap_err();
    assert!(matches!(err, ApiError::Validation(_)));
}
