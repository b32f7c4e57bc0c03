/// Canonical mint contract (third revision of the page).
pub const DEFAULT_TARGET_MODULE: &str = "loyalty_card";
pub const DEFAULT_TARGET_FUNCTION: &str = "mint_loyalty";

// Global constants
pub const GAS_BUDGET: u64 = 100_000_000;
pub const SUI_DECIMALS: f64 = 1_000_000_000.0;

pub const RECENT_TX_LIMIT: usize = 5;
pub const WALLET_REFRESH_INTERVAL_SECS: u64 = 10;
pub const CONFETTI_DURATION_MILLIS: u64 = 1_800;

pub const MAX_FIELD_LEN: usize = 256;

/// Environment override for the RPC endpoint; takes priority over the
/// network table and the config file.
pub const RPC_URL_ENV: &str = "LOYALTY_RPC_URL";
pub const CONFIG_DIR: &str = ".loyalty-tui";
pub const CONFIG_FILE: &str = "config.json";

pub const DEFAULT_EXPLORER_HOST: &str = "https://suiexplorer.com";

pub const NETWORKS: [(&str, &str); 3] = [
    ("devnet", "https://fullnode.devnet.sui.io:443"),
    ("testnet", "https://fullnode.testnet.sui.io:443"),
    ("mainnet", "https://fullnode.mainnet.sui.io:443"),
];

pub const BANNER_FRAMES: [&str; 3] = [
    "╔══════════════════════════════════════╗\n║  ▓▒░  L O Y A L T Y   C A R D  ░▒▓   ║\n║         MINT STATION // SUI          ║\n╚══════════════════════════════════════╝",
    "╔══════════════════════════════════════╗\n║  ▒░▓  L O Y A L T Y   C A R D  ▓░▒   ║\n║         MINT STATION // SUI          ║\n╚══════════════════════════════════════╝",
    "╔══════════════════════════════════════╗\n║  ░▓▒  L O Y A L T Y   C A R D  ▒▓░   ║\n║         MINT STATION // SUI          ║\n╚══════════════════════════════════════╝",
];

pub const CONFETTI_GLYPHS: [&str; 6] = ["✦", "✧", "❋", "•", "*", "○"];
