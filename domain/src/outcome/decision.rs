//! Decision value object

use crate::core::order::Order;
use crate::core::{COMMANDER_ID, GeneralId};
use crate::roster::Loyalty;
use serde::{Deserialize, Serialize};

/// The action one general took once its report tree was complete.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Decision {
    pub general: GeneralId,
    pub loyalty: Loyalty,
    pub action: Order,
}

impl Decision {
    pub fn new(general: GeneralId, loyalty: Loyalty, action: Order) -> Self {
        Self {
            general,
            loyalty,
            action,
        }
    }

    pub fn is_commander(&self) -> bool {
        self.general == COMMANDER_ID
    }

    pub fn is_loyal(&self) -> bool {
        self.loyalty.is_loyal()
    }
}
