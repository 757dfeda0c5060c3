/// Guess dictionary and answer pool. Every entry is five letters with
/// no repeats, which keeps the feedback rules easy to reason about.
pub const WORDS: &[&str] = &[
    "ABOUT", "ABOVE", "ABUSE", "ACTOR", "ACUTE", "ADMIT", "ADOPT", "ADULT", "AFTER", "AGENT",
    "ALBUM", "ALERT", "ALIEN", "ALIGN", "ALIKE", "ALIVE", "ALONE", "ALONG", "ALTER", "ANGEL",
    "ANGER", "ANGLE", "ANGRY", "ARGUE", "ARISE", "ASIDE", "AUDIO", "AVOID", "BADLY", "BAKER",
    "BASIC", "BEACH", "BEGAN", "BEGIN", "BEING", "BELOW", "BENCH", "BIRTH", "BLACK", "BLAME",
    "BLIND", "BLOCK", "BOARD", "BOUND", "BRAIN", "BRAND", "BREAD", "BREAK", "BRIEF", "BRING",
    "BROAD", "BROKE", "BROWN", "BUILD", "BUILT", "BUYER", "CABLE", "CALIF", "CAUSE", "CHAIN",
    "CHAIR", "CHART", "CHASE", "CHEAP", "CHEST", "CHIEF", "CHILD", "CHINA", "CHOSE", "CLAIM",
    "CLEAN", "CLEAR", "CLOSE", "COAST", "COULD", "COUNT", "COURT", "COVER", "CRAFT", "CRASH",
    "CRAZY", "CREAM", "CRIME", "CROWD", "CROWN", "CRUDE", "CURVE", "DAILY", "DANCE", "DEALT",
    "DEATH", "DEBUT", "DELAY", "DEPTH", "DOING", "DOUBT", "DOZEN", "DRAFT", "DRANK", "DRAWN",
    "DREAM", "DRINK", "DRIVE", "DROVE", "DYING", "EARLY", "EARTH", "EIGHT", "EMPTY", "ENJOY",
    "ENTRY", "EQUAL", "EXACT", "EXIST", "EXTRA", "FAITH", "FALSE", "FAULT", "FIBER", "FIELD",
    "FIGHT", "FINAL", "FIRST", "FIXED", "FLASH", "FLUID", "FOCUS", "FORCE", "FORTH", "FORTY",
    "FORUM", "FOUND", "FRAME", "FRANK", "FRAUD", "FRESH", "FRONT", "FRUIT", "GIANT", "GIVEN",
    "GLOBE", "GRACE", "GRADE", "GRAND", "GRANT", "GREAT", "GROUP", "GROWN", "GUARD", "GUEST",
    "GUIDE", "HEART", "HEAVY", "HENRY", "HORSE", "HOTEL", "HOUSE", "HUMAN", "IDEAL", "IMAGE",
    "INDEX", "INPUT", "JOINT", "JONES", "JUDGE", "LARGE", "LASER", "LATER", "LAUGH", "LAYER",
    "LEARN", "LEAST", "LEMON", "LEWIS", "LIGHT", "LINKS", "LIVED", "LIVES", "LOGIC", "LOWER",
    "LUCKY", "LUNCH", "LYING", "MAGIC", "MAJOR", "MAKER", "MARCH", "MATCH", "MAYBE", "MAYOR",
    "MEANT", "MEDIA", "METAL", "MIGHT", "MINOR", "MINUS", "MIXED", "MODEL", "MONEY", "MONTH",
    "MORAL", "MOUNT", "MOUSE", "MOUTH", "MOVED", "MOVIE", "MUSIC", "NEWLY", "NIGHT", "NOISE",
    "NORTH", "NOTED", "NOVEL", "NURSE", "OCEAN", "OFTEN", "OTHER", "OUGHT", "PAINT", "PANEL",
    "PARTY", "PHASE", "PHONE", "PILOT", "PITCH", "PLACE", "PLAIN", "PLANE", "PLANT", "PLATE",
    "POINT", "POUND", "POWER", "PRICE", "PRIDE", "PRIME", "PRINT", "PRIZE", "PROUD", "PROVE",
    "QUICK", "QUIET", "QUITE", "RADIO", "RAISE", "RANGE", "RAPID", "RATIO", "REACH", "READY",
    "RIGHT", "RIVAL", "ROBIN", "ROCKY", "ROMAN", "ROUGH", "ROUND", "ROUTE", "ROYAL", "SCALE",
    "SCOPE", "SCORE", "SHAPE", "SHARE", "SHARP", "SHELF", "SHIFT", "SHINE", "SHIRT", "SHOCK",
    "SHORT", "SHOWN", "SIGHT", "SINCE", "SIXTH", "SIXTY", "SIZED", "SLIDE", "SMART", "SMILE",
    "SMITH", "SMOKE", "SOLID", "SOLVE", "SOUND", "SOUTH", "SPACE", "SPARE", "SPEAK", "SPEND",
    "SPENT", "SPLIT", "SPOKE", "SPORT", "STAGE", "STAKE", "STAND", "STEAM", "STICK", "STOCK",
    "STONE", "STORE", "STORM", "STORY", "STRIP", "STUCK", "STUDY", "STYLE", "SUGAR", "SUITE",
    "SUPER", "TABLE", "TAKEN", "TAXES", "TEACH", "TEXAS", "THANK", "THEIR", "THICK", "THING",
    "THINK", "THIRD", "THOSE", "THREW", "THROW", "TIMES", "TODAY", "TOPIC", "TOUCH", "TOUGH",
    "TOWER", "TRACK", "TRADE", "TRAIN", "TREND", "TRIAL", "TRIBE", "TRICK", "TRIED", "TRIES",
    "TRUCK", "TRULY", "TRUNK", "TWICE", "UNDER", "UNITY", "UNTIL", "UPSET", "URBAN", "USAGE",
    "VALID", "VALUE", "VIDEO", "VIRUS", "VITAL", "VOCAL", "VOICE", "WASTE", "WATCH", "WATER",
    "WHILE", "WHITE", "WHOLE", "WHOSE", "WOMAN", "WOMEN", "WORLD", "WORSE", "WORST", "WORTH",
    "WOULD", "WOUND", "WRITE", "WRONG", "WROTE", "YOUNG", "YOUTH", "ABHOR", "ABIDE", "ABLED",
    "ABODE", "ABORT", "ACHED", "ACIDS", "ACING", "ACRES", "ACTED", "ADEPT", "ADMIN", "ADOBE",
    "ADORE", "ADORN", "AEGIS", "AFIRE", "AFOUL", "AGILE", "AGLOW", "AGONY", "AIDER", "AIMED",
    "AISLE", "ALOFT", "ALOUD", "AMBER", "AMBLE", "AMEND", "AMIGO", "AMONG", "AMPLE", "AMPLY",
    "AMUSE", "ANGST", "ANKLE", "ANTIC", "ANVIL", "APHID", "APRON", "AROSE", "ARSON", "ARTSY",
    "ASHEN", "ASKED", "ASPEN", "ATONE", "AUDIT", "AUNTY", "AVERT", "AWFUL", "AWOKE", "AXIOM",
    "AZURE", "BADGE", "BAGEL", "BALMY", "BANJO", "BARGE", "BARON", "BASIL", "BASIN", "BATCH",
    "BATHE", "BATON", "BAYOU", "BEARD", "BEAST", "BEGUN", "BELCH", "BERTH", "BIGHT", "BIJOU",
    "BINGE", "BINGO", "BIOME", "BIRCH", "BISON", "BLADE", "BLAND", "BLANK", "BLARE", "BLAST",
    "BLAZE", "BLEAK", "BLEAT", "BLEND", "BLIMP", "BLINK", "BLITZ", "BLOAT", "BLOKE", "BLOND",
    "BLOWN", "BLUES", "BLUNT", "BLURT", "BLUSH", "BOAST", "BOGEY", "BOGUS", "BOILS", "BOLTS",
    "BONDS", "BONED", "BONES", "BONUS", "BORAX", "BORED", "BOWEL", "BOXER", "BRACE", "BRAID",
    "BRAKE", "BRASH", "BRAVE", "BRAVO", "BRAWL", "BRAWN", "BRICK", "BRIDE", "BRINE", "BRINK",
    "BRINY", "BRISK", "BROIL", "BROTH", "BRUNT", "BRUSH", "BRUTE", "BUDGE", "BULGE", "BULKY",
    "BUNCH", "BURLY", "BURNS", "BURNT", "BURST", "BUSHY", "BUTCH", "BYLAW", "CABIN", "CADET",
    "CADRE", "CAMEL", "CAMEO", "CANDY", "CANOE", "CAPER", "CARGO", "CAROL", "CARVE", "CASTE",
    "CATER", "CAVIL", "CEDAR", "CHALK", "CHAMP", "CHANT", "CHAOS", "CHARD", "CHARM", "CHASM",
    "CHEAT", "CHIME", "CHIMP", "CHIRP", "CHIVE", "CHOIR", "CHOKE", "CHORD", "CHORE", "CHUMP",
    "CHUNK", "CHURN", "CHUTE", "CIDER", "CIGAR", "CLAMP", "CLANG", "CLANK", "CLASH", "CLASP",
    "CLEAT", "CLEFT", "CLERK", "CLIMB", "CLING", "CLOAK", "CLONE", "CLOTH", "CLOUD", "CLOUT",
    "CLOVE", "CLOWN", "CLUBS", "CLUMP", "CLUNG", "COBRA", "COMET", "CORAL", "CORNY", "COUGH",
    "COUPE", "COVEN", "COVET", "COWER", "CRAMP", "CRANE", "CRANK", "CRATE", "CRAVE", "CRAWL",
    "CRAZE", "CREAK", "CREPT", "CREST", "CRIED", "CRIES", "CRIMP", "CRISP", "CROAK", "CRONY",
    "CRUEL", "CRUMB", "CRUSH", "CRUST", "CRYPT", "CUMIN", "CUPID", "CURLY", "CURSE", "CURVY",
    "CUTIE", "CYBER", "DAIRY", "DAISY", "DATUM", "DAUNT", "DEBAR", "DEBIT", "DEBUG", "DECAF",
    "DECAY", "DECOR", "DECOY", "DECRY", "DEITY", "DELTA", "DEMON", "DEMUR", "DENIM", "DEPOT",
    "DERBY", "DETOX", "DEVIL", "DIARY", "DICEY", "DIMLY", "DINER", "DINGO", "DINGY", "DIRTY",
    "DISCO", "DITCH", "DIVAN", "DIVER", "DOGMA", "DONUT", "DOPEY", "DOUGH", "DOWEL", "DOWNY",
    "DOWRY", "DOYEN", "DRAIN", "DRAKE", "DRAPE", "DRAWL", "DRECK", "DRIFT", "DROIT", "DRONE",
    "DROWN", "DRUGS", "DRUMS", "DRUNK", "DUCHY", "DUCKY", "DUELS", "DUMPS", "DUMPY", "DUNCE",
    "DUNES", "DUSKY", "DUSTY", "DUTCH", "DUVET", "DWARF", "DWELT", "EBONY", "ECLAT", "EDICT",
    "EDIFY", "EKING", "ELBOW", "ELFIN", "EMAIL", "ENACT", "ENDOW", "ENVOY", "EPOXY", "EQUIP",
    "ERUPT", "ETHIC", "ETHOS", "EVICT", "EXALT", "EXPAT", "EXTOL", "EXULT", "EYING", "FABLE",
    "FACET", "FAINT", "FAIRY", "FAKER", "FANCY", "FARCE", "FAVOR", "FEAST", "FECAL", "FEIGN",
    "FELON", "FEMUR", "FERAL", "FETAL", "FETCH", "FETID", "FETUS", "FICUS", "FIEND", "FIERY",
    "FILCH", "FILER", "FILET", "FILMY", "FILTH", "FINCH", "FINER", "FIRED", "FIRMS", "FISHY",
    "FIXER", "FJORD", "FLACK", "FLAIR", "FLAKE", "FLAKY", "FLAME", "FLANK", "FLARE", "FLASK",
    "FLATS", "FLECK", "FLESH", "FLICK", "FLIER", "FLING", "FLINT", "FLIRT", "FLOAT", "FLOCK",
    "FLORA", "FLOUR", "FLOUT", "FLOWN", "FLUKE", "FLUNG", "FLUNK", "FLUSH", "FLUTE", "FOAMY",
    "FOCAL", "FOILS", "FOIST", "FOLKS", "FONTS", "FORAY", "FORGE", "FORMS", "FORTE", "FOYER",
    "FRAIL", "FREAK", "FRIED", "FRISK", "FROCK", "FROGS", "FROST", "FROWN", "FROZE", "FUMED",
    "FUNDS", "FUNGI", "FUNKY", "GAILY", "GAINS", "GAMER", "GAMES", "GAMUT", "GAUNT", "GAUZE",
    "GAVEL", "GAWKY", "GAZER", "GEARS", "GECKO", "GENUS", "GHOST", "GHOUL", "GIFTS", "GILDS",
    "GIRLS", "GIRTH", "GIVER", "GIVES", "GIZMO", "GLADE", "GLAND", "GLARE", "GLAZE", "GLEAM",
    "GLEAN", "GLIDE", "GLINT", "GLOAT", "GLORY", "GLOVE", "GLOWS", "GLUEY", "GLYPH", "GNARL",
    "GNASH", "GNOME", "GODLY", "GOURD", "GRAIN", "GRAPH", "GRASP", "GRATE", "GRAVE", "GRAVY",
    "GRAZE", "GRIEF", "GRIME", "GRIMY", "GRIND", "GRIPE", "GROAN", "GROIN", "GROPE", "GROVE",
    "GROWL", "GRUEL", "GRUNT", "GUILD", "GUILE", "GUILT", "GUISE", "GULCH", "GUMBO", "GUSTY",
    "HABIT", "HAIRY", "HALVE", "HANDY", "HARDY", "HASTE", "HASTY", "HATER", "HAUNT", "HAVEN",
    "HAVOC", "HAZEL", "HEADS", "HEADY", "HEARD", "HEFTY", "HEIRS", "HEIST", "HELIX", "HELPS",
    "HERON", "HINGE", "HINTS", "HOARD", "HOARY", "HOIST", "HOLES", "HOLEY", "HOMER", "HOMES",
    "HONEY", "HOPED", "HOPES", "HORNY", "HOTLY", "HOUND", "HOVEL", "HOVER", "HOWDY", "HUMID",
    "HUMOR", "HUNKY", "HUSKY", "HYDRO", "HYENA", "HYMEN", "HYPER", "ICHOR", "ICONS", "IDEAS",
    "IDLER", "IDOLS", "ILEUM", "IMBUE", "IMPEL", "IMPLY", "INBOX", "INCUR", "INEPT", "INERT",
    "INFER", "INGOT", "INLAY", "INLET", "INTER", "INTRO", "IRATE", "IRKED", "IRONS", "IRONY",
    "ISLET", "ITCHY", "ITEMS", "IVORY", "JABOT", "JAUNT", "JEANS", "JERKY", "JOKER", "JOUST",
    "JUICE", "JUICY", "JUMBO", "JUMPY", "JUNTA", "KLUTZ", "KNAVE", "KNEAD", "KNELT", "KNIFE",
    "KNOWS", "KUDOS", "LABOR", "LACED", "LADEN", "LAGER", "LANCE", "LANDS", "LANES", "LANKY",
    "LAPSE", "LARGO", "LATCH", "LATHE", "LAYUP", "LEACH", "LEAFY", "LEAKY", "LEANT", "LEAPT",
    "LEASH", "LEFTY", "LEMUR", "LETUP", "LEXIS", "LIFER", "LIKEN", "LIMBO", "LINER", "LINGO",
    "LIONS", "LITER", "LITHE", "LIVER", "LOADS", "LOAMY", "LOANS", "LOATH", "LOCKS", "LOCUS",
    "LODGE", "LOFTY", "LOGIN", "LOINS", "LONER", "LORDY", "LOSER", "LOTUS", "LOUGH", "LOUSE",
    "LOUSY", "LOVED", "LOVER", "LOVES", "LUCID", "LUMPY", "LUNAR", "LUNGE", "LURCH", "LURED",
    "LURKS", "LUSTY", "LYMPH", "LYNCH", "LYRIC", "MACHO", "MACRO", "MADLY", "MAIZE", "MAKES",
    "MALES", "MALTY", "MANGO", "MANIC", "MANOR", "MAPLE", "MARSH", "MASON", "MATED", "MATER",
    "MATES", "MATHS", "MAUVE", "MAZES", "MEALY", "MEANS", "MEATY", "MEDAL", "MEDIC", "MELON",
    "MENUS", "MERCY", "MERIT", "METRO", "MICRO", "MIDGE", "MIDST", "MILKY", "MINCE", "MINDS",
    "MINED", "MINER", "MINES", "MINTY", "MIRTH", "MISER", "MISTY", "MITES", "MIXER", "MIXES",
    "MOANS", "MOATS", "MOBIL", "MODES", "MOGUL", "MOIST", "MOLDY", "MOLES", "MONKS", "MORPH",
    "MORSE", "MOTEL", "MOTIF", "MOULD", "MOULT", "MOUND", "MOURN", "MOUSY", "MOVER", "MOVES",
    "MOWER", "MUCKS", "MUCKY", "MULCH", "MUNCH", "MURAL", "MURKY", "MUSHY", "MUSKY", "MUSTY",
    "MUTED", "MUTES", "MYTHS", "NACHO", "NAIVE", "NAKED", "NAMED", "NAMES", "NAPES", "NASTY",
    "NAVEL", "NEARS", "NEATO", "NECKS", "NEIGH", "NERDS", "NERDY", "NERVY", "NICHE", "NIFTY",
    "NOBLE", "NOBLY", "NODES", "NOISY", "NOMAD", "NORMS", "NOSED", "NOSEY", "NOTCH", "NOTES",
    "NUDGE", "NUKED", "NUKES", "NYMPH", "OAKEN", "OARED", "OATHS", "OBEYS", "OGLED", "OGLES",
    "OILED", "OILER", "OKAPI", "OKAYS", "OLDEN", "OLDER", "OLDIE", "OLIVE", "OMEGA", "OMENS",
    "OMITS", "ONSET", "OPALS", "OPENS", "OPERA", "OPINE", "OPIUM", "OPTED", "OPTIC", "ORBIT",
    "ORCAS", "ORGAN", "OUNCE", "OUTER", "OVARY", "OVATE", "OVENS", "OVERT", "OVINE", "OWING",
    "OWLET", "OWNED", "OWNER", "OXIDE", "PACED", "PACER", "PACES", "PACKS", "PACTS", "PAGED",
    "PAGER", "PAGES", "PAILS", "PAINS", "PAIRS", "PALMS", "PALSY", "PANIC", "PANSY", "PANTS",
    "PARCH", "PARED", "PARES", "PARKS", "PARSE", "PARTS", "PASTE", "PASTY", "PATCH", "PATEN",
    "PATER", "PATHS", "PATIO", "PATSY", "PAUSE", "PAVED", "PAVER", "PAVES", "PAWED", "PAWNS",
    "PAYER", "PEACH", "PEAKS", "PEAKY", "PEARL", "PEARS", "PECAN", "PECKS", "PEDAL", "PENAL",
    "PENIS", "PERCH", "PERKS", "PERKY", "PERMS", "PETAL", "PHONY", "PIANO", "PICKS", "PICKY",
    "PIERS", "PIETY", "PILES", "PINCH", "PINED", "PINES", "PINGS", "PINKO", "PINKS", "PINKY",
    "PINTO", "PINTS", "PIQUE", "PITHY", "PIVOT", "PIXEL", "PLAID", "PLAIT", "PLANK", "PLANS",
    "PLATS", "PLAYS", "PLEAD", "PLEAS", "PLEAT", "PLIED", "PLIES", "PLINK", "PLODS", "PLOTS",
    "PLOWS", "PLOYS", "PLUCK", "PLUGS", "PLUMB", "PLUME", "PLUMS", "PLUNG", "PLUNK", "PLUSH",
    "PLUTO", "POACH", "POCKS", "PODGY", "POEMS", "POESY", "POETS", "POISE", "POKED", "POKER",
    "POKES", "POLAR", "POLED", "POLES", "PONDS", "PONES", "PORCH", "PORED", "PORES", "PORGY",
    "PORKS", "PORKY", "PORTS", "POSED", "POSER", "POSIT", "POUCH", "POURS", "POUTS", "PRANK",
    "PRATE", "PRAWN", "PRAYS", "PREYS", "PRICK", "PRIED", "PRIES", "PRIMA", "PRIMO", "PRISM",
    "PRIVY", "PROBE", "PRODS", "PROFS", "PRONE", "PRONG", "PROSE", "PROSY", "PROWL", "PROXY",
    "PRUDE", "PRUNE", "PSALM", "PSYCH", "PUBIC", "PUCKA", "PUDGY", "PULSE", "PUNCH", "PUNKS",
    "PURGE", "PURSE", "PUSHY", "PYLON", "QUACK", "QUADS", "QUAIL", "QUAKE", "QUALM", "QUART",
    "QUASH", "QUASI", "QUERY", "QUEST", "QUILT", "QUIPS", "QUIRK", "QUITS", "QUOTA", "QUOTE",
    "QUOTH", "RABID", "RACED", "RACES", "RACKS", "RADON", "RAFTS", "RAGED", "RAGES", "RAIDS",
    "RAILS", "RAINS", "RAINY", "RAKED", "RAKES", "RALPH", "RAMPS", "RANCH", "RANDY", "RANGY",
    "RANKS", "RANTS", "RAPED", "RAPES", "RASED", "RASPY", "RATED", "RATES", "RAVED", "RAVEL",
    "RAVEN", "RAVES", "RAYON", "RAZED", "RAZES", "REACT", "READS", "REALM", "REAMS", "REAPS",
    "REBUT", "RECAP", "RECUT", "REFIT", "REGAL", "REHAB", "REIGN", "REINS", "RELAX", "RELAY",
    "RELIC", "REMIT", "RENAL", "RENTS", "REPAY", "REPLY", "REPOS", "RESIN", "RETCH", "RHINO",
    "RHYME", "RICED", "RICES", "RICKY", "RIDES", "RIDGE", "RIDGY", "RIFLE", "RIFTS", "RILED",
    "RILES", "RINDS", "RINGS", "RINKS", "RINSE", "RIOTS", "RIPEN", "RISEN", "RISKY", "RITES",
    "RITZY", "RIVED", "RIVEN", "RIVET", "ROACH", "ROADS", "ROAMS", "ROANS", "ROAST", "ROBED",
    "ROBES", "ROCKS", "ROGUE", "ROILS", "ROLES", "ROMPS", "ROPED", "ROPES", "ROSIN", "ROTAS",
    "ROUGE", "ROUPS", "ROUSE", "ROUST", "ROUTS", "ROVED", "ROVES", "ROWAN", "ROWDY", "ROWED",
    "RUBLE", "RUGBY", "RUINS", "RULED", "RULES", "RUMBA", "RUMPS", "RUNIC", "RUNTS", "RUSHY",
    "RUSTY", "SABRE", "SADLY", "SAFER", "SAGER", "SAHIB", "SAINT", "SAITH", "SALEM", "SALON",
    "SALTY", "SALVE", "SALVO", "SANDY", "SANER", "SARGE", "SATED", "SATIN", "SATYR", "SAUCE",
    "SAUCY", "SAUTE", "SAVED", "SAVER", "SAVOR", "SAVOY", "SAWED", "SAYER", "SCALD", "SCALP",
    "SCALY", "SCAMP", "SCANT", "SCARE", "SCARF", "SCARP", "SCARY", "SCENT", "SCHMO", "SCHWA",
    "SCION", "SCOLD", "SCONE", "SCORN", "SCOUR", "SCOUT", "SCOWL", "SCRAM", "SCRAP", "SCREW",
    "SCRIP", "SCRUB", "SCRUM", "SCUBA", "SEAMY", "SEBUM", "SEDAN", "SENOR", "SEPAL", "SEPIA",
    "SEPOY", "SEPTA", "SERIF", "SERUM", "SETUP", "SHACK", "SHADE", "SHADY", "SHAFT", "SHAKE",
    "SHAKY", "SHALE", "SHALT", "SHAME", "SHANK", "SHARD", "SHARK", "SHAVE", "SHAWL", "SHEAF",
    "SHEAR", "SHEIK", "SHERD", "SHIED", "SHINY", "SHIRE", "SHIRK", "SHIVA", "SHOAL", "SHOED",
    "SHOER", "SHONE", "SHORE", "SHORN", "SHOUT", "SHOVE", "SHOWY", "SHRED", "SHREW", "SHRUB",
    "SHRUG", "SHUCK", "SHUNT", "SHYER", "SICKO", "SIDLE", "SIGMA", "SILKY", "SILTY", "SINEW",
    "SINGE", "SIRED", "SIREN", "SIRUP", "SITAR", "SITED", "SIZER", "SKATE", "SKEIN", "SKIED",
    "SKIER", "SKIMP", "SKIRT", "SLACK", "SLAIN", "SLAKE", "SLANG", "SLANT", "SLATE", "SLAVE",
    "SLEPT", "SLICE", "SLICK", "SLIER", "SLIME", "SLIMY", "SLING", "SLINK", "SLOPE", "SLOTH",
    "SLUED", "SLUMP", "SLUNG", "SLUNK", "SLURP", "SMEAR", "SMELT", "SMIRK", "SMITE", "SMOCK",
    "SMOKY", "SMOTE", "SNACK", "SNAFU", "SNAIL", "SNAKE", "SNAKY", "SNARE", "SNARL", "SNEAK",
    "SNIDE", "SNORE", "SNORT", "SNOUT", "SNOWY", "SNUCK", "SOAPY", "SOBER", "SOFTY", "SOLAR",
    "SOLED", "SONAR", "SONIC", "SOREL", "SOUGH", "SOUPY", "SOWED", "SOWER", "SPADE", "SPANK",
    "SPARK", "SPATE", "SPAWN", "SPEAR", "SPERM", "SPICE", "SPICY", "SPIED", "SPIEL", "SPIKE",
    "SPIKY", "SPILT", "SPINE", "SPINY", "SPIRE", "SPITE", "SPITZ", "SPLAT", "SPOIL", "SPORE",
    "SPOUT", "SPRAY", "SPRIG", "SPRIT", "SPRUE", "SPUNK", "SPURN", "SPURT", "SQUAD", "SQUAT",
    "SQUIB", "SQUID", "STACK", "STAID", "STAIN", "STAIR", "STALE", "STALK", "STAMP", "STANK",
    "STARE", "STARK", "STAVE", "STEAD", "STEAK", "STEAL", "STEIN", "STENO", "STERN", "STING",
    "STINK", "STOIC", "STOKE", "STOLE", "STOMP", "STONY", "STORK", "STOVE", "STRAP", "STRAW",
    "STRAY", "STROP", "STRUM", "STUMP", "STUNG", "STUNK", "STUPE", "SUAVE", "SUING", "SULKY",
    "SUMAC", "SURGE", "SURLY", "SWAIN", "SWAMP", "SWANK", "SWARM", "SWATH", "SWEAR", "SWEAT",
    "SWEPT", "SWIFT", "SWINE", "SWING", "SWIPE", "SWIRL", "SWORD", "SWORE", "SWORN", "SWUNG",
    "SYNOD", "SYRUP", "TACKY", "TACOS", "TAILS", "TAKER", "TAKES", "TALES", "TALKS", "TALKY",
    "TALON", "TAMED", "TAMER", "TAMES", "TANGO", "TANGY", "TANKS", "TANSY", "TAPED", "TAPER",
    "TAPES", "TAPIR", "TARDY", "TARED", "TARES", "TARPS", "TAUPE", "TAWNY", "TAXED", "TAXIS",
    "TEAKS", "TEAMS", "TEARS", "TEARY", "TEMPO", "TEMPS", "TENOR", "TERMS", "THENS", "THIEF",
    "THORN", "THROB", "THROE", "THUGS", "THUMB", "THUMP", "THUNK", "THYME", "TICKS", "TIDAL",
    "TIDES", "TIERS", "TIGER", "TILDE", "TILED", "TILES", "TIMED", "TIMER", "TINES", "TINGE",
    "TIRED", "TIRES", "TOGAS", "TOILS", "TOKED", "TOKEN", "TOKES", "TOMBS", "TOMES", "TONAL",
    "TONED", "TONER", "TONES", "TONGS", "TONIC", "TONUS", "TOPAZ", "TORCH", "TORIC", "TORUS",
    "TOURS", "TOWED", "TOWEL", "TOWNS", "TOXIC", "TOXIN", "TRACE", "TRAIL", "TRAMP", "TRAMS",
    "TRANS", "TRASH", "TRASK", "TRAWL", "TRAYS", "TREAD", "TREKS", "TRIAD", "TRIKE", "TRIMS",
    "TRINE", "TRIOS", "TRIPE", "TRIPS", "TROMP", "TROPE", "TROVE", "TRUCE", "TRUED", "TRUES",
    "TRUMP", "TUBAS", "TUBED", "TUBER", "TUBES", "TUCKS", "TULIP", "TUMOR", "TUNAS", "TUNED",
    "TUNER", "TUNES", "TUNIC", "TURBO", "TURFS", "TURNS", "TURPS", "TUXES", "TWAIN", "TWANG",
    "TWEAK", "TWERP", "TWIGS", "TWINE", "TWINS", "TWIRL", "TYING", "TYKES", "TYPED", "TYPES",
    "TYPIC", "TYPOS", "ULCER", "ULTRA", "UMBRA", "UMIAK", "UMPHS", "UNCLE", "UNFED", "UNFIT",
    "UNITE", "UNITS", "UNWED", "UNZIP", "UPEND", "URGED", "URGES", "URINE", "USHER", "USING",
    "VAGUE", "VAILS", "VALES", "VALET", "VALOR", "VAMPS", "VANES", "VAPOR", "VAULT", "VAUNT",
    "VEALS", "VEINS", "VELAR", "VENAL", "VENDS", "VENOM", "VENTS", "VERBS", "VERSO", "VETCH",
    "VIALS", "VIBES", "VICAR", "VICES", "VIEWS", "VIGOR", "VILER", "VINES", "VINYL", "VIOLA",
    "VIPER", "VIRAL", "VISED", "VISOR", "VISTA", "VIXEN", "VIZOR", "VODKA", "VOGUE", "VOIDS",
    "VOILA", "VOLES", "VOLTS", "VOMIT", "VOTED", "VOTER", "VOTES", "VOUCH", "VOWED", "VOWEL",
    "VOWER", "VYING", "WACKO", "WACKS", "WACKY", "WADER", "WADES", "WAFER", "WAFTS", "WAGED",
    "WAGER", "WAGES", "WAGON", "WAIFS", "WAILS", "WAIST", "WAITS", "WAIVE", "WAKED", "WAKEN",
    "WAKES", "WALDO", "WALES", "WALKS", "WALTZ", "WANDS", "WANES", "WANTS", "WARDS", "WARES",
    "WARMS", "WARNS", "WARPS", "WARTS", "WARTY", "WASPY", "WAVED", "WAVER", "WAVES", "WAXED",
    "WAXEN", "WAXES", "WEARY", "WEDGY", "WEFTS", "WEIGH", "WEIRD", "WEIRS", "WELDS", "WELSH",
    "WELTS", "WENCH", "WENDS", "WHACK", "WHALE", "WHAMS", "WHARF", "WHEAT", "WHELK", "WHELM",
    "WHELP", "WHIMS", "WHINE", "WHINY", "WHIPS", "WHIRL", "WHIRS", "WHISK", "WHIST", "WHITS",
    "WHOMP", "WHOPS", "WHORE", "WHORL", "WICKS", "WIDEN", "WIDER", "WIDTH", "WIELD", "WIFED",
    "WIFES", "WIGHT", "WILED", "WILES", "WILTS", "WIMPS", "WIMPY", "WINCE", "WINCH", "WINDS",
    "WINDY", "WINED", "WINES", "WINGS", "WINKS", "WINOS", "WIPED", "WIPER", "WIPES", "WIRED",
    "WIRES", "WISED", "WISER", "WISPY", "WITCH", "WITEN", "WIVED", "WIVES", "WIZEN", "WOLDS",
    "WONKY", "WORDS", "WORDY", "WORKS", "WORMS", "WORMY", "WOVEN", "WRACK", "WRAPS", "WRATH",
    "WREAK", "WRECK", "WREST", "WRING", "WRIST", "WROTH", "WRUNG", "XYLEM", "YACHT", "YANKS",
    "YARDS", "YARNS", "YAWED", "YAWLS", "YAWNS", "YEAHS", "YEARS", "YEAST", "YELPS", "YIELD",
    "YIKES", "YODEL", "YOGAS", "YOGIS", "YOKED", "YOKES", "YOLKS", "YOURS", "YOWLS", "YUKON",
    "ZEROS", "ZESTY", "ZILCH", "ZINCS", "ZINGY", "ZONED", "ZONES", "ZONKS",
];
