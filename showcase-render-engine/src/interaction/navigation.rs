use bevy::prelude::*;

/// Request to leave the showcase for another page.
#[derive(Event, Debug, Clone, PartialEq, Eq)]
pub struct NavigationRequest {
    pub url: String,
}

pub fn perform_navigation(mut requests: EventReader<NavigationRequest>) {
    // Only the last request of a frame matters once the page unloads.
    let Some(request) = requests.read().last() else {
        return;
    };

    #[cfg(target_arch = "wasm32")]
    {
        let Some(window) = web_sys::window() else {
            error!("Window object not available for navigation");
            return;
        };
        info!("Navigating to {}", request.url);
        if let Err(e) = window.location().set_href(&request.url) {
            error!("Failed to navigate to {}: {:?}", request.url, e);
        }
    }

    #[cfg(not(target_arch = "wasm32"))]
    {
        info!("Navigation to {} requested (no browser on native)", request.url);
    }
}
