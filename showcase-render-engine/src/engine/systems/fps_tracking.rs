use crate::engine::core::app_state::FpsText;
use crate::engine::loading::progress::LoadingProgress;
use crate::rpc::web_rpc::WebRpcInterface;
use bevy::diagnostic::{DiagnosticsStore, FrameTimeDiagnosticsPlugin};
use bevy::prelude::*;
use constants::render_settings::FPS_NOTIFICATION_INTERVAL;

fn smoothed_fps(diagnostics: &DiagnosticsStore) -> Option<f64> {
    diagnostics
        .get(&FrameTimeDiagnosticsPlugin::FPS)
        .and_then(|fps| fps.smoothed())
}

/// Throttles host notifications to one per interval.
#[derive(Debug, Default)]
pub struct ReportThrottle {
    last_sent: Option<f32>,
}

impl ReportThrottle {
    pub fn ready(&mut self, now: f32) -> bool {
        match self.last_sent {
            Some(last) if now - last < FPS_NOTIFICATION_INTERVAL => false,
            _ => {
                self.last_sent = Some(now);
                true
            }
        }
    }
}

pub fn fps_notification_system(
    mut rpc_interface: ResMut<WebRpcInterface>,
    diagnostics: Res<DiagnosticsStore>,
    mut throttle: Local<ReportThrottle>,
    time: Res<Time>,
) {
    let Some(fps) = smoothed_fps(&diagnostics) else {
        return;
    };
    if throttle.ready(time.elapsed_secs()) {
        rpc_interface.send_notification("fps_update", serde_json::json!({ "fps": fps as f32 }));
    }
}

// Native overlay: frame rate plus any models still streaming in.
pub fn fps_text_update_system(
    diagnostics: Res<DiagnosticsStore>,
    loading_progress: Res<LoadingProgress>,
    mut query: Query<&mut Text, With<FpsText>>,
) {
    let Some(fps) = smoothed_fps(&diagnostics) else {
        return;
    };
    let pending = loading_progress.models_pending();
    let label = if pending > 0 {
        format!("FPS: {fps:.1} | loading {pending} models")
    } else {
        format!("FPS: {fps:.1}")
    };
    for mut text in &mut query {
        text.0.clone_from(&label);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn throttle_reports_first_sample_then_waits_for_interval() {
        let mut throttle = ReportThrottle::default();
        assert!(throttle.ready(1.0));
        assert!(!throttle.ready(1.0 + FPS_NOTIFICATION_INTERVAL * 0.5));
        assert!(throttle.ready(1.0 + FPS_NOTIFICATION_INTERVAL));
    }
}
