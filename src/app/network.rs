use std::sync::Arc;

use tokio::sync::Mutex;

use crate::app::core::App;
use crate::constants::NETWORKS;

impl App {
    pub fn start_network_switch(&mut self) {
        self.is_switching_network = true;
    }

    pub fn cancel_network_switch(&mut self) {
        self.is_switching_network = false;
    }

    pub fn switch_to_network(&mut self, network_index: usize) {
        if network_index < NETWORKS.len() {
            self.network_state.current_network = network_index;
        }
        self.is_switching_network = false;
    }

    pub fn get_network_options(&self) -> String {
        format!(
            "1) {}  2) {}  3) {}",
            NETWORKS[0].0.to_uppercase(),
            NETWORKS[1].0.to_uppercase(),
            NETWORKS[2].0.to_uppercase()
        )
    }

    /// Rebuild the RPC client and wallet session for the newly selected
    /// network, then refresh the advisory wallet info.
    pub fn spawn_reconnect(app: Arc<Mutex<App>>) {
        tokio::spawn(async move {
            {
                let mut app_guard = app.lock().await;
                app_guard.sui_balance = None;
                app_guard.recent_transactions.clear();
                app_guard.connect().await;
            }
            App::spawn_refresh(app);
        });
    }
}
