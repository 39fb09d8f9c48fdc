//! Irregular English inflections.
//!
//! Shared by the tagger, which uses the verb table to recognise past tenses
//! and participles, and by the lemmatizer, which uses every table as its
//! exception list.

/// `(form, base, treebank tag)`
pub const VERBS: &[(&str, &str, &str)] = &[
    ("am", "be", "VBP"),
    ("is", "be", "VBZ"),
    ("are", "be", "VBP"),
    ("was", "be", "VBD"),
    ("were", "be", "VBD"),
    ("been", "be", "VBN"),
    ("being", "be", "VBG"),
    ("has", "have", "VBZ"),
    ("had", "have", "VBD"),
    ("having", "have", "VBG"),
    ("does", "do", "VBZ"),
    ("did", "do", "VBD"),
    ("done", "do", "VBN"),
    ("went", "go", "VBD"),
    ("gone", "go", "VBN"),
    ("ran", "run", "VBD"),
    ("sat", "sit", "VBD"),
    ("ate", "eat", "VBD"),
    ("eaten", "eat", "VBN"),
    ("saw", "see", "VBD"),
    ("seen", "see", "VBN"),
    ("took", "take", "VBD"),
    ("taken", "take", "VBN"),
    ("got", "get", "VBD"),
    ("gotten", "get", "VBN"),
    ("made", "make", "VBD"),
    ("said", "say", "VBD"),
    ("came", "come", "VBD"),
    ("knew", "know", "VBD"),
    ("known", "know", "VBN"),
    ("thought", "think", "VBD"),
    ("told", "tell", "VBD"),
    ("found", "find", "VBD"),
    ("gave", "give", "VBD"),
    ("given", "give", "VBN"),
    ("began", "begin", "VBD"),
    ("begun", "begin", "VBN"),
    ("wrote", "write", "VBD"),
    ("written", "write", "VBN"),
    ("spoke", "speak", "VBD"),
    ("spoken", "speak", "VBN"),
    ("brought", "bring", "VBD"),
    ("bought", "buy", "VBD"),
    ("caught", "catch", "VBD"),
    ("taught", "teach", "VBD"),
    ("felt", "feel", "VBD"),
    ("left", "leave", "VBD"),
    ("kept", "keep", "VBD"),
    ("slept", "sleep", "VBD"),
    ("met", "meet", "VBD"),
    ("sent", "send", "VBD"),
    ("spent", "spend", "VBD"),
    ("built", "build", "VBD"),
    ("held", "hold", "VBD"),
    ("stood", "stand", "VBD"),
    ("understood", "understand", "VBD"),
    ("won", "win", "VBD"),
    ("lost", "lose", "VBD"),
    ("paid", "pay", "VBD"),
    ("sold", "sell", "VBD"),
    ("drove", "drive", "VBD"),
    ("driven", "drive", "VBN"),
    ("rode", "ride", "VBD"),
    ("ridden", "ride", "VBN"),
    ("rose", "rise", "VBD"),
    ("risen", "rise", "VBN"),
    ("chose", "choose", "VBD"),
    ("chosen", "choose", "VBN"),
    ("broke", "break", "VBD"),
    ("broken", "break", "VBN"),
    ("fell", "fall", "VBD"),
    ("fallen", "fall", "VBN"),
    ("forgot", "forget", "VBD"),
    ("forgotten", "forget", "VBN"),
    ("flew", "fly", "VBD"),
    ("flown", "fly", "VBN"),
    ("grew", "grow", "VBD"),
    ("grown", "grow", "VBN"),
    ("drew", "draw", "VBD"),
    ("drawn", "draw", "VBN"),
    ("threw", "throw", "VBD"),
    ("thrown", "throw", "VBN"),
    ("wore", "wear", "VBD"),
    ("worn", "wear", "VBN"),
    ("swam", "swim", "VBD"),
    ("swum", "swim", "VBN"),
    ("sang", "sing", "VBD"),
    ("sung", "sing", "VBN"),
    ("drank", "drink", "VBD"),
    ("drunk", "drink", "VBN"),
    ("rang", "ring", "VBD"),
    ("rung", "ring", "VBN"),
    ("bitten", "bite", "VBN"),
    ("hid", "hide", "VBD"),
    ("hidden", "hide", "VBN"),
    ("shook", "shake", "VBD"),
    ("shaken", "shake", "VBN"),
    ("stole", "steal", "VBD"),
    ("stolen", "steal", "VBN"),
    ("woke", "wake", "VBD"),
    ("woken", "wake", "VBN"),
    ("froze", "freeze", "VBD"),
    ("frozen", "freeze", "VBN"),
    ("tore", "tear", "VBD"),
    ("torn", "tear", "VBN"),
    ("swore", "swear", "VBD"),
    ("sworn", "swear", "VBN"),
    ("forgave", "forgive", "VBD"),
    ("forgiven", "forgive", "VBN"),
    ("withdrew", "withdraw", "VBD"),
    ("withdrawn", "withdraw", "VBN"),
    ("became", "become", "VBD"),
    ("overcame", "overcome", "VBD"),
    ("undertook", "undertake", "VBD"),
    ("led", "lead", "VBD"),
    ("fed", "feed", "VBD"),
    ("fled", "flee", "VBD"),
    ("bled", "bleed", "VBD"),
    ("bred", "breed", "VBD"),
    ("fought", "fight", "VBD"),
    ("sought", "seek", "VBD"),
    ("meant", "mean", "VBD"),
    ("heard", "hear", "VBD"),
    ("laid", "lay", "VBD"),
    ("shone", "shine", "VBD"),
    ("shot", "shoot", "VBD"),
    ("lit", "light", "VBD"),
    ("slid", "slide", "VBD"),
    ("stuck", "stick", "VBD"),
    ("struck", "strike", "VBD"),
    ("swung", "swing", "VBD"),
    ("dug", "dig", "VBD"),
    ("hung", "hang", "VBD"),
    ("spun", "spin", "VBD"),
    ("swept", "sweep", "VBD"),
    ("wept", "weep", "VBD"),
    ("bent", "bend", "VBD"),
    ("lent", "lend", "VBD"),
    ("dealt", "deal", "VBD"),
    ("dreamt", "dream", "VBD"),
    ("learnt", "learn", "VBD"),
    ("burnt", "burn", "VBD"),
];

/// `(form, base)`
pub const NOUNS: &[(&str, &str)] = &[
    ("children", "child"),
    ("mice", "mouse"),
    ("lice", "louse"),
    ("geese", "goose"),
    ("feet", "foot"),
    ("teeth", "tooth"),
    ("oxen", "ox"),
    ("people", "person"),
    ("knives", "knife"),
    ("wives", "wife"),
    ("lives", "life"),
    ("criteria", "criterion"),
    ("phenomena", "phenomenon"),
    ("analyses", "analysis"),
    ("theses", "thesis"),
    ("crises", "crisis"),
    ("hypotheses", "hypothesis"),
    ("indices", "index"),
    ("matrices", "matrix"),
    ("cacti", "cactus"),
    ("fungi", "fungus"),
    ("nuclei", "nucleus"),
    ("radii", "radius"),
    ("alumni", "alumnus"),
];

/// `(form, base)`
pub const ADJECTIVES: &[(&str, &str)] = &[
    ("better", "good"),
    ("best", "good"),
    ("worse", "bad"),
    ("worst", "bad"),
    ("further", "far"),
    ("farther", "far"),
    ("furthest", "far"),
    ("farthest", "far"),
    ("less", "little"),
    ("least", "little"),
    ("elder", "old"),
    ("eldest", "old"),
];

/// `(form, base)`
pub const ADVERBS: &[(&str, &str)] = &[
    ("better", "well"),
    ("best", "well"),
    ("further", "far"),
    ("farther", "far"),
];
