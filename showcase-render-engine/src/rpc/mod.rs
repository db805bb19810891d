//! JSON-RPC 2.0 communication layer for the page hosting the showcase.
//!
//! Implements bidirectional messaging between the Bevy engine and its host page via
//! iframe postMessage, supporting both request-response and notification patterns.
//!
//! ## Architecture
//!
//! The RPC system uses standard JSON-RPC 2.0 protocol with:
//! - **Requests**: Expect responses with matching IDs
//! - **Notifications**: One-way messages without responses
//! - **Responses**: Reply to requests with results or errors
//!
//! ## Message Flow
//!
//! ```text
//! Host (Parent Window)  <──postMessage──>  Bevy (iframe)
//!        │                                        │
//!        ├─ Request (with ID) ──────────────────> │
//!        │                                        ├─ Process request
//!        │ <───────────────── Response (with ID) ─┤
//!        │                                        │
//!        │ <────────── Notification (no ID) ─────┤
//! ```
//!
//! ## Adding New RPC Methods
//!
//! Add a match arm in `handle_rpc_request()` and a handler returning
//! `Result<Value, RpcError>`. Handlers read the world through `RpcContext`;
//! anything that mutates the scene is pushed as an event for the owning
//! system to apply on the same frame.
//!
//! ```rust,ignore
//! "get_inventory_count" => Ok(serde_json::json!({ "count": context.inventory.items().len() })),
//! ```
//!
//! Calling from the host page:
//!
//! ```typescript
//! iframe.contentWindow.postMessage(JSON.stringify({
//!   jsonrpc: "2.0",
//!   method: "open_modal",
//!   params: { id: "globe" },
//!   id: 1
//! }), "*");
//! ```
//!
//! ## Sending Notifications from Bevy
//!
//! Use `WebRpcInterface::send_notification()` to push updates to the host:
//!
//! ```rust,ignore
//! fn your_system(mut rpc: ResMut<WebRpcInterface>) {
//!     rpc.send_notification("event_name", json!({
//!         "data": "value",
//!         "timestamp": 123456
//!     }));
//! }
//! ```
//!
//! ## Error Handling
//!
//! Standard JSON-RPC 2.0 error codes:
//! - `-32600`: Invalid request
//! - `-32601`: Method not found
//! - `-32602`: Invalid params
//! - `-32603`: Internal error
//!
//! ## Existing Methods
//!
//! ### Scene
//! - `get_objects`: List spawned showcase objects with positions
//!
//! ### Modals
//! - `open_modal`: Open a modal by id (`{"id": "..."}`)
//! - `close_modal`: Dismiss the open modal, if any
//! - `get_inventory`: Modals the visitor has opened so far
//!
//! ### Diagnostics
//! - `get_fps`: Retrieve current frame rate
//!
//! ## Notifications
//!
//! - `scene_ready`, `object_clicked`, `modal_opened`, `modal_closed`
//! - `model_load_failed`, `fps_update`

/// JSON-RPC 2.0 bidirectional communication system for the host page.
///
/// Handles request-response patterns, notifications, and WASM message listeners.
pub mod web_rpc;
