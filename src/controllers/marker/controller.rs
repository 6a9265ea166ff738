use std::sync::Arc;

use tracing::{debug, warn};

use crate::controllers::marker::errors::MarkerError;
use crate::controllers::marker::events::{MarkerEvent, MarkerMove};
use crate::controllers::marker::ports::{MarkerPresenterPort, MarkerSink};
use crate::core::data::bounds_policy::BoundsPolicy;
use crate::core::data::normalized_position::NormalizedPosition;
use crate::core::data::screen_size::ScreenSize;
use crate::core::marker::state::MarkerState;

pub struct MarkerController {
    screen: ScreenSize,
    policy: BoundsPolicy,
    state: Arc<MarkerState>,
    presenter_port: Arc<dyn MarkerPresenterPort>,
}

impl MarkerController {
    pub fn new(
        screen: ScreenSize,
        policy: BoundsPolicy,
        state: Arc<MarkerState>,
        presenter_port: Arc<dyn MarkerPresenterPort>,
    ) -> Self {
        Self {
            screen,
            policy,
            state,
            presenter_port,
        }
    }

    #[must_use]
    pub fn state(&self) -> &Arc<MarkerState> {
        &self.state
    }
}

impl MarkerSink for MarkerController {
    fn move_to(&self, normalized: NormalizedPosition) -> Result<MarkerMove, MarkerError> {
        let position = match normalized.to_pixels(self.screen, self.policy) {
            Ok(position) => position,
            Err(err) => {
                self.reject(&err.to_string());
                return Err(err.into());
            }
        };

        let generation = self.state.set(position, normalized);
        let marker_move = MarkerMove {
            normalized,
            position,
            generation,
        };

        debug!(
            x = normalized.x,
            y = normalized.y,
            position = %position,
            generation,
            "marker moved"
        );

        self.presenter_port.present(MarkerEvent::Moved(marker_move));

        Ok(marker_move)
    }

    fn reject(&self, message: &str) {
        warn!(reason = message, "marker update rejected");
        self.presenter_port
            .present(MarkerEvent::Rejected(message.to_string()));
    }
}
