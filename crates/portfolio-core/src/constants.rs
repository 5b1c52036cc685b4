// Shared scene and animation tuning constants.

// Particle cloud
pub const PARTICLE_COUNT: usize = 2000;
pub const PARTICLE_SPREAD: f32 = 200.0; // edge length of the cube particles are scattered in
pub const PARTICLE_SIZE: f32 = 2.0;
pub const PARTICLE_OPACITY: f32 = 0.8;
pub const PARTICLE_INITIAL_HUE_BASE: f32 = 0.5;
pub const PARTICLE_INITIAL_HUE_SPAN: f32 = 0.3;

// Particle motion (radians, radians per second)
pub const PARTICLE_YAW_RATE: f32 = 0.05;
pub const PARTICLE_PITCH_FREQ: f32 = 0.1;
pub const PARTICLE_PITCH_AMPLITUDE: f32 = 0.1;

// Particle colors derived from the ambient color
pub const COMPLEMENT_HUE_SHIFT: f32 = 0.5; // turns
pub const PARTICLE_SATURATION: f32 = 0.7;
pub const PARTICLE_LIGHTNESS_BASE: f32 = 0.6;
pub const PARTICLE_LIGHTNESS_SWING: f32 = 0.2;
pub const PARTICLE_LIGHTNESS_RATE: f32 = 0.5;
pub const PARTICLE_LIGHTNESS_PHASE_STEP: f32 = 0.01;

// Shapes
pub const SHAPE_OPACITY: f32 = 0.7;
pub const SHAPE_SATURATION: f32 = 0.7;
pub const SHAPE_LIGHTNESS: f32 = 0.5;
pub const SHAPE_HUE_RATE: f32 = 0.1; // turns per second
pub const SHAPE_HUE_STEP: f32 = 0.2; // turns between consecutive shapes
pub const SHAPE_DRIFT_Y: f32 = 0.01; // per tick
pub const SHAPE_DRIFT_X: f32 = 0.005; // per tick
pub const SHAPE_DRIFT_LIMIT: f32 = 6.0; // max offset from the home position
pub const SHAPE_SPIN_BASE_SEC: f32 = 10.0;
pub const SHAPE_SPIN_STEP_SEC: f32 = 2.0;
pub const SHAPE_WIREFRAME_PROBABILITY: f64 = 0.5;

// Camera
pub const CAMERA_FOV_DEG: f32 = 75.0;
pub const CAMERA_NEAR: f32 = 0.1;
pub const CAMERA_FAR: f32 = 1000.0;
pub const CAMERA_DISTANCE: f32 = 30.0;
pub const PARALLAX_RANGE: f32 = 5.0; // world units the camera leans at full pointer deflection
pub const CAMERA_EASE: f32 = 0.05; // fraction of remaining distance per tick

// Color cycle
pub const CYCLE_SEGMENT_SEC: f32 = 3.0;

/// Reference palette the background/ambient color cycles through, in order.
pub const REFERENCE_PALETTE: [[f32; 3]; 10] = [
    [0.039, 0.039, 0.039], // near black
    [0.067, 0.043, 0.141], // indigo night
    [0.043, 0.086, 0.180], // deep navy
    [0.020, 0.141, 0.173], // petrol
    [0.024, 0.157, 0.110], // forest
    [0.106, 0.149, 0.039], // moss
    [0.180, 0.122, 0.031], // umber
    [0.196, 0.055, 0.063], // oxblood
    [0.165, 0.031, 0.149], // plum
    [0.098, 0.043, 0.196], // violet
];

// Fog (linear, world units from the camera)
pub const FOG_NEAR: f32 = 50.0;
pub const FOG_FAR: f32 = 200.0;

// Lighting
pub const AMBIENT_LIGHT_HEX: u32 = 0x404040;
pub const AMBIENT_LIGHT_INTENSITY: f32 = 0.4;
pub const KEY_LIGHT_HEX: u32 = 0x00ff88;
pub const KEY_LIGHT_INTENSITY: f32 = 1.0;
pub const KEY_LIGHT_POSITION: [f32; 3] = [10.0, 10.0, 5.0];
pub const FILL_LIGHT_HEX: u32 = 0x00d4ff;
pub const FILL_LIGHT_INTENSITY: f32 = 0.8;
pub const FILL_LIGHT_RANGE: f32 = 50.0;
pub const FILL_LIGHT_POSITION: [f32; 3] = [-10.0, -10.0, 10.0];

// Seed for particle placement and shape randomisation
pub const DEFAULT_SEED: u64 = 42;

// Entrance animations (CSS pixels, seconds)
pub const REVEAL_START_FRACTION: f32 = 0.8; // element top crossing 80% of the viewport plays
pub const REVEAL_END_FRACTION: f32 = 0.2;
pub const CARD_OFFSET_Y: f32 = 100.0;
pub const CARD_DURATION_SEC: f32 = 0.8;
pub const CARD_STAGGER_SEC: f32 = 0.2;
pub const FORM_OFFSET_X: f32 = 100.0;
pub const FORM_DURATION_SEC: f32 = 1.0;

// Loading screen
pub const LOADING_HOLD_SEC: f32 = 2.0;
pub const LOADING_FADE_SEC: f32 = 1.0;

// Contact form feedback
pub const SENDING_LABEL: &str = "Sending...";
pub const SENT_LABEL: &str = "Message Sent!";
pub const SENT_DELAY_MS: u32 = 1500;
pub const RESTORE_DELAY_MS: u32 = 2000;
