pub struct Icons;

impl Icons {
    pub const ROCKET: &str = "🚀";
    pub const CHECK: &str = "✅";
    pub const INFO: &str = "ℹ️";
    pub const STATS: &str = "📊";
    pub const QUESTION: &str = "❓";
}
