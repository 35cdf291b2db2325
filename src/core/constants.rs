// Simulation clock
pub const DEFAULT_TICK_MS: f64 = 1000.0 / 60.0;

// Player base stats
pub const PLAYER_BASE_HEALTH: u32 = 100;
pub const PLAYER_BASE_MANA: u32 = 50;
pub const PLAYER_BASE_STRENGTH: u32 = 10;
pub const PLAYER_BASE_DEXTERITY: u32 = 10;
pub const PLAYER_BASE_INTELLIGENCE: u32 = 10;
pub const PLAYER_BASE_DEFENSE: u32 = 5;
pub const NUM_ATTRIBUTES: usize = 4;

// Player movement (units per second)
pub const PLAYER_SPEED: f32 = 150.0;
pub const PLAYER_RUN_MULTIPLIER: f32 = 1.5;
pub const PLAYER_JUMP_IMPULSE: f32 = 350.0;
pub const PLAYER_DRAG: f32 = 500.0;
pub const ENEMY_DRAG: f32 = 300.0;
pub const GRAVITY: f32 = 300.0;
pub const DEFAULT_RESPAWN_X: f32 = 400.0;
pub const DEFAULT_RESPAWN_Y: f32 = 300.0;

// XP and leveling
pub const XP_TO_FIRST_LEVEL: u64 = 100;
// xp_to_next grows by 6/5 (x1.2, rounded down) per level
pub const XP_GROWTH_NUMERATOR: u64 = 6;
pub const XP_GROWTH_DENOMINATOR: u64 = 5;
pub const LEVEL_UP_HEALTH: u32 = 10;
pub const LEVEL_UP_MANA: u32 = 5;
// STR, DEX, INT, DEF
pub const LEVEL_UP_ATTRIBUTE_GROWTH: [u32; NUM_ATTRIBUTES] = [2, 1, 1, 1];

// Combat
pub const CRIT_CHANCE: f64 = 0.10;
pub const CRIT_MULTIPLIER: f64 = 1.5;
pub const DAMAGE_VARIANCE: f64 = 0.20;
pub const MIN_DAMAGE: u32 = 1;
pub const KNOCKBACK_FORCE: f32 = 100.0;
pub const PLAYER_INVULNERABILITY_MS: f64 = 1000.0;
pub const PLAYER_BASE_ATTACK_INTERVAL_MS: f64 = 500.0;
pub const ENEMY_ATTACK_COOLDOWN_MS: f64 = 1500.0;

// Weapon reach by kind
pub const SWORD_RANGE: f32 = 50.0;
pub const AXE_RANGE: f32 = 45.0;
pub const SPEAR_RANGE: f32 = 70.0;
pub const BOW_RANGE: f32 = 200.0;
pub const STAFF_RANGE: f32 = 180.0;

// Abilities
pub const ABILITY_MANA_COST: u32 = 10;
pub const DASH_IMPULSE: f32 = 300.0;
pub const DASH_RANGE: f32 = 80.0;
pub const DASH_STRENGTH_FACTOR: f64 = 1.5;
pub const HEAL_ABILITY_AMOUNT: u32 = 20;
pub const NOVA_RANGE: f32 = 100.0;
pub const NOVA_STRENGTH_FACTOR: f64 = 0.8;

// Enemy AI
pub const PATROL_DISTANCE: f32 = 150.0;
pub const PATROL_SPEED_FACTOR: f32 = 0.5;
pub const DETECTION_RANGE: f32 = 120.0;
pub const DISENGAGE_FACTOR: f32 = 1.5;
pub const ENEMY_ATTACK_RANGE: f32 = 35.0;

// Enemy spawning
pub const MAX_ENEMIES: usize = 15;
pub const SPAWN_DELAY_MS: f64 = 3000.0;
pub const SPAWN_JITTER_X: f32 = 50.0;
pub const SPAWN_JITTER_Y: f32 = 30.0;

// Inventory
pub const INVENTORY_CAPACITY: usize = 48;
pub const STARTING_GOLD: u64 = 100;
pub const STARTING_HEALTH_POTIONS: u32 = 3;
pub const STARTING_MANA_POTIONS: u32 = 2;

// Item synthesis base values (before rarity multiplier)
pub const WEAPON_BASE_DAMAGE: u32 = 15;
pub const WEAPON_BASE_ATTACK_SPEED: f32 = 1.0;
pub const ARMOR_BASE_DEFENSE: u32 = 5;
pub const HELMET_BASE_DEFENSE: u32 = 3;
pub const BOOTS_BASE_DEFENSE: u32 = 2;
pub const HEALTH_POTION_VALUE: u32 = 30;
pub const MANA_POTION_VALUE: u32 = 20;

// Loot chances
pub const HEALTH_POTION_DROP_CHANCE: f64 = 0.3;
pub const MANA_POTION_DROP_CHANCE: f64 = 0.2;
