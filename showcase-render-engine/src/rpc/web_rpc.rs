use crate::engine::assets::scene_manifest::SceneManifest;
use crate::ui::inventory::Inventory;
use crate::ui::modal::{ModalRequest, ModalState};
use bevy::diagnostic::{DiagnosticsStore, FrameTimeDiagnosticsPlugin};
use bevy::prelude::*;
use serde::{Deserialize, Serialize};

#[cfg(target_arch = "wasm32")]
use wasm_bindgen::prelude::*;

#[cfg(target_arch = "wasm32")]
use wasm_bindgen::JsValue;

#[cfg(target_arch = "wasm32")]
use web_sys::{MessageEvent, window};

const JSONRPC_VERSION: &str = "2.0";

/// JSON-RPC 2.0 request structure.
#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct RpcRequest {
    pub jsonrpc: String,
    pub method: String,
    #[serde(default)]
    pub params: serde_json::Value,
    pub id: Option<serde_json::Value>,
}

/// JSON-RPC 2.0 response structure.
#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct RpcResponse {
    pub jsonrpc: String,
    pub result: Option<serde_json::Value>,
    pub error: Option<RpcError>,
    pub id: Option<serde_json::Value>,
}

impl RpcResponse {
    fn from_result(id: serde_json::Value, result: Result<serde_json::Value, RpcError>) -> Self {
        let (result, error) = match result {
            Ok(value) => (Some(value), None),
            Err(error) => (None, Some(error)),
        };
        Self {
            jsonrpc: JSONRPC_VERSION.to_string(),
            result,
            error,
            id: Some(id),
        }
    }
}

/// JSON-RPC 2.0 notification structure for one-way communication.
#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct RpcNotification {
    pub jsonrpc: String,
    pub method: String,
    pub params: serde_json::Value,
}

/// JSON-RPC error structure following specification.
#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct RpcError {
    pub code: i32,
    pub message: String,
    pub data: Option<serde_json::Value>,
}

/// Resource managing bidirectional RPC communication between the host page and Bevy.
/// Handles both request-response patterns and notification broadcasting.
#[derive(Resource, Default)]
pub struct WebRpcInterface {
    outgoing_notifications: Vec<RpcNotification>,
    outgoing_responses: Vec<RpcResponse>,
}

impl WebRpcInterface {
    /// Send notification to the host page without expecting response.
    pub fn send_notification(&mut self, method: &str, params: serde_json::Value) {
        self.outgoing_notifications.push(RpcNotification {
            jsonrpc: JSONRPC_VERSION.to_string(),
            method: method.to_string(),
            params,
        });
    }

    /// Queue response for transmission to the host page.
    fn queue_response(&mut self, response: RpcResponse) {
        self.outgoing_responses.push(response);
    }
}

/// Plugin establishing the postMessage RPC layer for embedding the showcase in a page.
pub struct WebRpcPlugin;

impl Plugin for WebRpcPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<WebRpcInterface>()
            .add_event::<IncomingRpcMessage>()
            .add_systems(
                Update,
                (
                    process_incoming_messages,
                    handle_rpc_messages,
                    send_outgoing_messages,
                )
                    .chain(),
            );

        #[cfg(target_arch = "wasm32")]
        app.add_systems(Startup, setup_message_listener);
    }
}

#[cfg(target_arch = "wasm32")]
fn setup_message_listener(mut commands: Commands) {
    use std::sync::Arc;
    use std::sync::Mutex;

    let message_queue: Arc<Mutex<Vec<String>>> = Arc::default();
    let listener_queue = Arc::clone(&message_queue);

    // Only string payloads that look like JSON-RPC are queued; parsing happens in Bevy.
    let closure = Closure::wrap(Box::new(move |event: MessageEvent| {
        let Ok(data) = event.data().dyn_into::<js_sys::JsString>() else {
            return;
        };
        let message = String::from(data);
        if !message.contains("jsonrpc") {
            return;
        }
        if let Ok(mut queue) = listener_queue.lock() {
            queue.push(message);
        }
    }) as Box<dyn FnMut(MessageEvent)>);

    if let Some(window) = window() {
        if let Err(e) =
            window.add_event_listener_with_callback("message", closure.as_ref().unchecked_ref())
        {
            error!("Failed to register message listener: {:?}", e);
            return;
        }
    }

    // The listener lives as long as the page.
    closure.forget();
    commands.insert_resource(MessageQueue(message_queue));
}

/// Resource wrapping thread-safe message queue for WASM event handling.
#[derive(Resource)]
struct MessageQueue(std::sync::Arc<std::sync::Mutex<Vec<String>>>);

/// Event representing incoming RPC message from the host page.
#[derive(Event)]
struct IncomingRpcMessage {
    content: String,
}

fn process_incoming_messages(
    message_queue: Option<Res<MessageQueue>>,
    mut message_events: EventWriter<IncomingRpcMessage>,
) {
    let Some(message_queue) = message_queue else {
        return;
    };

    let messages = message_queue
        .0
        .lock()
        .map(|mut queue| std::mem::take(&mut *queue))
        .unwrap_or_default();

    message_events.write_batch(
        messages
            .into_iter()
            .map(|content| IncomingRpcMessage { content }),
    );
}

fn handle_rpc_messages(
    mut events: EventReader<IncomingRpcMessage>,
    diagnostics: Res<DiagnosticsStore>,
    manifest: Option<Res<SceneManifest>>,
    inventory: Res<Inventory>,
    modal_state: Res<ModalState>,
    mut rpc_interface: ResMut<WebRpcInterface>,
    mut modal_events: EventWriter<ModalRequest>,
) {
    let context = RpcContext {
        diagnostics: &diagnostics,
        manifest: manifest.as_deref(),
        inventory: &inventory,
        modal_state: &modal_state,
    };
    let mut modal_requests = Vec::new();

    for event in events.read() {
        if let Some(response) = respond_to_message(&event.content, &context, &mut modal_requests) {
            rpc_interface.queue_response(response);
        }
    }

    for request in modal_requests {
        modal_events.write(request);
    }
}

/// Read-only view of the world an RPC request may consult.
struct RpcContext<'a> {
    diagnostics: &'a DiagnosticsStore,
    manifest: Option<&'a SceneManifest>,
    inventory: &'a Inventory,
    modal_state: &'a ModalState,
}

/// Decode one raw message and answer it. Messages that are not valid JSON or not
/// shaped like a request are answered with an error, under a null id when none
/// can be recovered.
fn respond_to_message(
    content: &str,
    context: &RpcContext,
    modal_requests: &mut Vec<ModalRequest>,
) -> Option<RpcResponse> {
    let value = match serde_json::from_str::<serde_json::Value>(content) {
        Ok(value) => value,
        Err(e) => {
            warn!("Malformed RPC message: {}", e);
            return Some(RpcResponse::from_result(
                serde_json::Value::Null,
                Err(RpcError::parse_error(&e.to_string())),
            ));
        }
    };

    let id = value.get("id").cloned().unwrap_or(serde_json::Value::Null);
    match serde_json::from_value::<RpcRequest>(value) {
        Ok(request) => {
            debug!("Processing RPC method: {}", request.method);
            handle_rpc_request(&request, context, modal_requests)
        }
        Err(e) => {
            warn!("Invalid RPC request: {}", e);
            Some(RpcResponse::from_result(
                id,
                Err(RpcError::malformed_request(&e.to_string())),
            ))
        }
    }
}

/// Handle individual RPC request and generate response based on method.
/// Modal changes are collected into `modal_requests` for the caller to dispatch.
fn handle_rpc_request(
    request: &RpcRequest,
    context: &RpcContext,
    modal_requests: &mut Vec<ModalRequest>,
) -> Option<RpcResponse> {
    // Only generate responses for requests with IDs (notifications have no ID).
    let id = request.id.clone()?;

    if request.jsonrpc != JSONRPC_VERSION {
        return Some(RpcResponse::from_result(
            id,
            Err(RpcError::invalid_request(&request.jsonrpc)),
        ));
    }

    let result = match request.method.as_str() {
        "get_objects" => handle_get_objects(context.manifest),
        "open_modal" => handle_open_modal(&request.params, context.manifest, modal_requests),
        "close_modal" => handle_close_modal(context.modal_state, modal_requests),
        "get_inventory" => handle_get_inventory(context.inventory),
        "get_fps" => handle_get_fps(context.diagnostics),
        _ => {
            warn!("Unknown RPC method: {}", request.method);
            Err(RpcError::method_not_found(&request.method))
        }
    };

    Some(RpcResponse::from_result(id, result))
}

/// List the spawned objects by name with their interactivity.
fn handle_get_objects(manifest: Option<&SceneManifest>) -> Result<serde_json::Value, RpcError> {
    let manifest = manifest.ok_or_else(|| RpcError::internal_error("Scene not loaded yet"))?;

    let objects: Vec<serde_json::Value> = manifest
        .valid_objects()
        .into_iter()
        .map(|object| {
            serde_json::json!({
                "name": object.name,
                "interactable": object.interactable,
                "position": object.position,
            })
        })
        .collect();

    Ok(serde_json::json!({ "objects": objects }))
}

/// Open a modal by id, the same way clicking its object would.
fn handle_open_modal(
    params: &serde_json::Value,
    manifest: Option<&SceneManifest>,
    modal_requests: &mut Vec<ModalRequest>,
) -> Result<serde_json::Value, RpcError> {
    #[derive(serde::Deserialize)]
    struct OpenModalParams {
        id: String,
    }

    let modal_params = serde_json::from_value::<OpenModalParams>(params.clone())
        .map_err(|_| RpcError::invalid_params("Expected 'id' parameter"))?;

    let manifest = manifest.ok_or_else(|| RpcError::internal_error("Scene not loaded yet"))?;
    if manifest.modal(&modal_params.id).is_none() {
        return Err(RpcError::invalid_params(&format!(
            "Unknown modal: {}",
            modal_params.id
        )));
    }

    modal_requests.push(ModalRequest::Open {
        modal_id: modal_params.id.clone(),
    });

    Ok(serde_json::json!({
        "success": true,
        "modal": modal_params.id
    }))
}

fn handle_close_modal(
    modal_state: &ModalState,
    modal_requests: &mut Vec<ModalRequest>,
) -> Result<serde_json::Value, RpcError> {
    let was_open = modal_state.is_open();
    if was_open {
        modal_requests.push(ModalRequest::Close);
    }
    Ok(serde_json::json!({ "success": true, "was_open": was_open }))
}

fn handle_get_inventory(inventory: &Inventory) -> Result<serde_json::Value, RpcError> {
    let items = serde_json::to_value(inventory.items())
        .map_err(|e| RpcError::internal_error(&e.to_string()))?;
    Ok(serde_json::json!({ "items": items }))
}

/// Handle FPS retrieval with diagnostic system integration.
fn handle_get_fps(diagnostics: &DiagnosticsStore) -> Result<serde_json::Value, RpcError> {
    let fps = diagnostics
        .get(&FrameTimeDiagnosticsPlugin::FPS)
        .and_then(|fps_diagnostic| fps_diagnostic.smoothed())
        .unwrap_or(0.0) as f32;

    Ok(serde_json::json!({
        "fps": fps
    }))
}

/// Flush queued notifications, then responses, to the host page.
fn send_outgoing_messages(mut rpc_interface: ResMut<WebRpcInterface>) {
    let interface = &mut *rpc_interface;
    interface
        .outgoing_notifications
        .drain(..)
        .for_each(|notification| send_message_to_parent(&notification));
    interface
        .outgoing_responses
        .drain(..)
        .for_each(|response| send_message_to_parent(&response));
}

/// Post a serialized message to the embedding window, if there is one.
#[cfg(target_arch = "wasm32")]
fn send_message_to_parent<T: Serialize>(message: &T) {
    let json = match serde_json::to_string(message) {
        Ok(json) => json,
        Err(e) => {
            error!("Failed to serialize RPC message: {}", e);
            return;
        }
    };
    let Some(window) = window() else {
        error!("Window object not available");
        return;
    };
    // Running top-level (not embedded) is normal; messages are simply dropped.
    let Some(parent) = window.parent().ok().flatten() else {
        return;
    };
    if let Err(e) = parent.post_message(&JsValue::from_str(&json), "*") {
        error!("Failed to send message to parent: {:?}", e);
    }
}

#[cfg(not(target_arch = "wasm32"))]
fn send_message_to_parent<T: Serialize>(_message: &T) {}

/// Standard JSON-RPC error codes.
impl RpcError {
    fn with_code(code: i32, message: &str, data: Option<serde_json::Value>) -> Self {
        Self {
            code,
            message: message.to_string(),
            data,
        }
    }

    pub fn parse_error(detail: &str) -> Self {
        Self::with_code(
            -32700,
            "Parse error",
            Some(serde_json::json!({ "detail": detail })),
        )
    }

    pub fn malformed_request(detail: &str) -> Self {
        Self::with_code(
            -32600,
            "Invalid request",
            Some(serde_json::json!({ "detail": detail })),
        )
    }

    pub fn invalid_request(version: &str) -> Self {
        Self::with_code(
            -32600,
            "Invalid request",
            Some(serde_json::json!({ "jsonrpc": version })),
        )
    }

    pub fn method_not_found(method: &str) -> Self {
        Self::with_code(
            -32601,
            "Method not found",
            Some(serde_json::json!({ "method": method })),
        )
    }

    pub fn invalid_params(message: &str) -> Self {
        Self::with_code(-32602, message, None)
    }

    pub fn internal_error(message: &str) -> Self {
        Self::with_code(-32603, message, None)
    }
}
