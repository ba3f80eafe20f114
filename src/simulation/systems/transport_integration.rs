//! Contains the Bevy system responsible for sending the simulation state via the transport layer.

use bevy_ecs::prelude::*;
use tracing::error;

use crate::simulation::resources::CurrentSimulationState;
use crate::transport::TransportController;

/// Bevy system that takes the `CurrentSimulationState` resource and sends it
/// using the `TransportController` resource, when one is installed.
///
/// Must run after `update_current_simulation_state_resource` so the latest
/// snapshot goes out. A failed send is logged and the tick carries on.
pub fn send_simulation_data_system(
    state: Res<CurrentSimulationState>,
    controller: Option<ResMut<TransportController>>,
) {
    let Some(mut controller) = controller else {
        return;
    };

    if let Err(e) = controller.send_simulation_state(&state.0) {
        error!("Failed to send simulation state: {}", e);
    }
}
