/// Auto-advance period of the phone preview.
pub const CYCLE_MS: u32 = 4_000;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PhoneView {
    Dashboard,
    Map,
    Insights,
    Personal,
}

impl PhoneView {
    pub const ALL: [PhoneView; 4] =
        [PhoneView::Dashboard, PhoneView::Map, PhoneView::Insights, PhoneView::Personal];

    pub fn key(&self) -> &'static str {
        match self {
            PhoneView::Dashboard => "dashboard",
            PhoneView::Map => "map",
            PhoneView::Insights => "insights",
            PhoneView::Personal => "personal",
        }
    }

    /// Unknown keys fall back to the dashboard.
    pub fn from_key(key: &str) -> Self {
        PhoneView::ALL.into_iter().find(|v| v.key() == key).unwrap_or(PhoneView::Dashboard)
    }

    pub fn markup(&self) -> &'static str {
        match self {
            PhoneView::Dashboard => DASHBOARD,
            PhoneView::Map => MAP,
            PhoneView::Insights => INSIGHTS,
            PhoneView::Personal => PERSONAL,
        }
    }
}

/// Preview markup for a view key.
pub fn fragment(key: &str) -> &'static str {
    PhoneView::from_key(key).markup()
}

/// Cursor shared by clicks and the timer.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct PhoneCycler {
    cursor: usize,
}

impl PhoneCycler {
    pub fn current(&self) -> PhoneView {
        PhoneView::ALL[self.cursor]
    }

    pub fn advance(&mut self) -> PhoneView {
        self.cursor = (self.cursor + 1) % PhoneView::ALL.len();
        self.current()
    }

    pub fn reset(&mut self) {
        self.cursor = 0;
    }
}

const DASHBOARD: &str = concat!(
    r#"<div class="status-bar"><span>9:41</span><div class="battery"></div></div>"#,
    r#"<div class="app-title">Fluent</div>
<div class="health-scores">
    <div class="score-card campus">
        <div class="score-circle"><span class="score">8/10</span></div>
        <span class="score-label">Campus Health</span>
    </div>
    <div class="score-card dorm">
        <div class="score-circle"><span class="score">7/10</span></div>
        <span class="score-label">Your Dorm</span>
    </div>
</div>
<div class="insight-card">
    <i class="fas fa-exclamation-triangle"></i>
    <div>
        <div class="insight-title">Flu Reports Rising</div>
        <div class="insight-subtitle">15 cases in Unit 2</div>
    </div>
</div>"#
);

const MAP: &str = concat!(
    r#"<div class="status-bar"><span>9:41</span><div class="battery"></div></div>"#,
    r#"<div class="app-title">Sickness Map</div>
<div class="map-card">
    <i class="fas fa-map-marked-alt"></i>
    <div class="map-card-title">Interactive Campus Map</div>
    <div class="map-card-subtitle">View illness reports by location</div>
</div>
<div class="insight-card">
    <i class="fas fa-location-dot hot"></i>
    <div>
        <div class="insight-title">Unit 2 Hotspot</div>
        <div class="insight-subtitle">High activity detected</div>
    </div>
</div>"#
);

const INSIGHTS: &str = concat!(
    r#"<div class="status-bar"><span>9:41</span><div class="battery"></div></div>"#,
    r#"<div class="app-title">Health Insights</div>
<div class="insight-list">
    <div class="insight-card">
        <i class="fas fa-chart-line trend"></i>
        <div>
            <div class="insight-title">Weekly Trend</div>
            <div class="insight-subtitle">Health improving overall</div>
        </div>
    </div>
    <div class="insight-card">
        <i class="fas fa-shield-alt safe"></i>
        <div>
            <div class="insight-title">Your Dorm Safe</div>
            <div class="insight-subtitle">Below campus average</div>
        </div>
    </div>
</div>"#
);

const PERSONAL: &str = concat!(
    r#"<div class="status-bar"><span>9:41</span><div class="battery"></div></div>"#,
    r#"<div class="app-title">Your Health</div>
<div class="insight-list">
    <div class="insight-card">
        <i class="fas fa-user-chart pattern"></i>
        <div>
            <div class="insight-title">Health Pattern</div>
            <div class="insight-subtitle">Typically sick 2-3 days</div>
        </div>
    </div>
    <div class="insight-card">
        <i class="fas fa-clock recovery"></i>
        <div>
            <div class="insight-title">Recovery Time</div>
            <div class="insight-subtitle">Faster than average</div>
        </div>
    </div>
    <div class="insight-card">
        <i class="fas fa-heartbeat hot"></i>
        <div>
            <div class="insight-title">Common Symptoms</div>
            <div class="insight-subtitle">Headache, fatigue</div>
        </div>
    </div>
</div>"#
);
