//! Word tables for values the `fake` crate does not cover.

pub const HACKER_ABBREVIATIONS: &[&str] = &[
    "TCP", "HTTP", "SDD", "RAM", "GB", "CSS", "SSL", "AGP", "SQL", "FTP", "PCI", "AI", "ADP",
    "RSS", "XML", "EXE", "COM", "HDD", "THX", "SMTP", "SMS", "USB", "PNG", "SAS", "IB", "SCSI",
    "JSON", "XSS", "JBOD",
];

pub const HACKER_ADJECTIVES: &[&str] = &[
    "auxiliary", "primary", "back-end", "digital", "open-source", "virtual", "cross-platform",
    "redundant", "online", "haptic", "multi-byte", "bluetooth", "wireless", "1080p", "neural",
    "optical", "solid state", "mobile",
];

pub const HACKER_NOUNS: &[&str] = &[
    "driver", "protocol", "bandwidth", "panel", "microchip", "program", "port", "card", "array",
    "interface", "system", "sensor", "firewall", "hard drive", "pixel", "alarm", "feed",
    "monitor", "application", "transmitter", "bus", "circuit", "capacitor", "matrix",
];

pub const HACKER_VERBS: &[&str] = &[
    "back up", "bypass", "hack", "override", "compress", "copy", "navigate", "index", "connect",
    "generate", "quantify", "calculate", "synthesize", "input", "transmit", "program", "reboot",
    "parse",
];

pub const HACKER_ING_VERBS: &[&str] = &[
    "backing up", "bypassing", "hacking", "overriding", "compressing", "copying", "navigating",
    "indexing", "connecting", "generating", "quantifying", "calculating", "synthesizing",
    "transmitting", "programming", "parsing",
];

pub const TEAM_CREATURES: &[&str] = &[
    "ants", "bats", "bears", "bees", "birds", "buffalo", "cats", "chickens", "cattle", "dogs",
    "dolphins", "ducks", "elephants", "fishes", "foxes", "frogs", "geese", "goats", "horses",
    "kangaroos", "lions", "monkeys", "owls", "oxen", "penguins", "people", "pigs", "rabbits",
    "sheep", "tigers", "whales", "wolves", "zebras", "banshees", "crows", "black cats",
    "chimeras", "ghosts", "conspirators", "dragons", "dwarves", "elves", "enchanters",
    "exorcists", "sons", "foes", "giants", "gnomes", "goblins", "gooses", "griffins",
    "lycanthropes", "nemesis", "ogres", "oracles", "prophets", "sorcerors", "spiders",
    "spirits", "vampires", "warlocks", "vixens", "werewolves", "witches", "worshipers",
    "zombies", "druids",
];

pub const COMMERCE_COLORS: &[&str] = &[
    "red", "green", "blue", "yellow", "purple", "mint green", "teal", "white", "black", "orange",
    "pink", "grey", "maroon", "violet", "turquoise", "tan", "sky blue", "salmon", "plum",
    "orchid", "olive", "magenta", "lime", "ivory", "indigo", "gold", "fuchsia", "cyan", "azure",
    "lavender", "silver",
];

pub const COMMERCE_DEPARTMENTS: &[&str] = &[
    "Books", "Movies", "Music", "Games", "Electronics", "Computers", "Home", "Garden", "Tools",
    "Grocery", "Health", "Beauty", "Toys", "Kids", "Baby", "Clothing", "Shoes", "Jewelery",
    "Sports", "Outdoors", "Automotive", "Industrial",
];

pub const PRODUCT_ADJECTIVES: &[&str] = &[
    "Small", "Ergonomic", "Rustic", "Intelligent", "Gorgeous", "Incredible", "Fantastic",
    "Practical", "Sleek", "Awesome", "Enormous", "Mediocre", "Synergistic", "Heavy Duty",
    "Lightweight", "Aerodynamic", "Durable",
];

pub const PRODUCT_MATERIALS: &[&str] = &[
    "Steel", "Wooden", "Concrete", "Plastic", "Cotton", "Granite", "Rubber", "Leather", "Silk",
    "Wool", "Linen", "Marble", "Iron", "Bronze", "Copper", "Aluminum", "Paper",
];

pub const PRODUCT_NOUNS: &[&str] = &[
    "Chair", "Car", "Computer", "Gloves", "Pants", "Shirt", "Table", "Shoes", "Hat", "Plate",
    "Knife", "Bottle", "Coat", "Lamp", "Keyboard", "Bag", "Bench", "Clock", "Watch", "Wallet",
];

pub const CREDIT_CARD_TYPES: &[&str] = &[
    "visa", "mastercard", "american_express", "discover", "diners_club", "jcb", "switch", "solo",
    "dankort", "maestro", "forbrugsforeningen", "laser",
];

pub const APP_NAMES: &[&str] = &[
    "Redhold", "Treeflex", "Trippledex", "Kanlam", "Bigtax", "Daltfresh", "Toughjoyfax",
    "Mat Lam Tam", "Otcom", "Tres-Zap", "Y-Solowarm", "Tresom", "Voltsillam", "Biodex",
    "Greenlam", "Viva", "Matsoft", "Temp", "Zoolab", "Subin", "Rank", "Job", "Stringtough",
    "Tin", "It", "Home Ing", "Zamit", "Sonsing", "Konklab", "Alpha", "Latlux", "Voyatouch",
    "Alphazap", "Holdlamis", "Zaam-Dox", "Sub-Ex", "Quo Lux", "Bamity", "Ventosanzap",
    "Lotstring", "Hatity", "Tempsoft", "Overhold", "Fixflex", "Konklux", "Zontrax", "Tampflex",
    "Span", "Namfix", "Transcof", "Stim", "Fix San", "Sonair", "Stronghold", "Fintone",
    "Y-find", "Opela", "Lotlux", "Ronstring", "Zathin", "Duobam", "Keylex",
];

pub const DOMAIN_WORDS: &[&str] = &[
    "acme", "globex", "initech", "umbrella", "hooli", "vandelay", "stark", "wayne", "wonka",
    "tyrell", "cyberdyne", "soylent", "aperture", "massive", "dynamic", "nimbus", "zenith",
    "orbit", "pioneer", "summit",
];

/// Templates for hacker phrases; `{abbr}`, `{adj}`, `{noun}`, `{verb}` and
/// `{ing}` are substituted with random words from the tables above.
pub const HACKER_PHRASES: &[&str] = &[
    "If we {verb} the {noun}, we can get to the {abbr} {noun} through the {adj} {abbr} {noun}!",
    "We need to {verb} the {adj} {abbr} {noun}!",
    "Try to {verb} the {abbr} {noun}, maybe it will {verb} the {adj} {noun}!",
    "You can't {verb} the {noun} without {ing} the {adj} {abbr} {noun}!",
    "Use the {adj} {abbr} {noun}, then you can {verb} the {adj} {noun}!",
    "The {abbr} {noun} is down, {verb} the {adj} {noun} so we can {verb} the {abbr} {noun}!",
    "{ing} the {noun} won't do anything, we need to {verb} the {adj} {abbr} {noun}!",
    "I'll {verb} the {adj} {abbr} {noun}, that should {noun} the {abbr} {noun}!",
];
