// Static word lists for the passphrase and memorable generation modes.
// Both lists hold 64 entries, so each drawn word adds 6 bits.

pub const PASSPHRASE_WORDS: &[&str] = &[
    "correct", "horse", "battery", "staple", "mountain", "river", "ocean", "forest",
    "thunder", "lightning", "rainbow", "sunset", "sunrise", "galaxy", "planet", "comet",
    "dragon", "phoenix", "unicorn", "wizard", "castle", "kingdom", "treasure", "adventure",
    "journey", "discovery", "mystery", "legend", "story", "dream", "vision", "hope",
    "anchor", "blossom", "canyon", "desert", "ember", "falcon", "glacier", "harbor",
    "island", "jungle", "lantern", "meadow", "nebula", "orchard", "pebble", "quartz",
    "raven", "saddle", "timber", "tundra", "valley", "willow", "zephyr", "beacon",
    "cobalt", "dune", "echo", "fjord", "granite", "horizon", "ivory", "juniper",
];

pub const MEMORABLE_WORDS: &[&str] = &[
    "apple", "banana", "orange", "grape", "melon", "house", "garden", "beach",
    "coffee", "pizza", "burger", "pasta", "salad", "cloud", "tiger", "eagle",
    "guitar", "piano", "rocket", "camera", "pencil", "happy", "sunny", "windy",
    "rainy", "bright", "swift", "quiet", "fresh", "sweet", "clean", "smooth",
    "heavy", "early", "young", "brave", "calm", "wise", "bold", "lucky",
    "silver", "golden", "purple", "crimson", "amber", "frosty", "misty", "stormy",
    "otter", "panda", "koala", "badger", "lemon", "mango", "cherry", "pepper",
    "violin", "trumpet", "button", "candle", "marble", "velvet", "wagon", "yacht",
];
