// src/sentiment/lexicon.rs
//! Word tables for `LexiconScorer`. Entries are lowercase; polarities sit in `[-1.0, 1.0]`.

// (word, polarity)
pub(super) const LEXICON: &[(&str, f64)] = &[
    // joy, excitement
    ("happy", 0.8),
    ("happier", 0.7),
    ("happiest", 1.0),
    ("happiness", 0.8),
    ("glad", 0.5),
    ("joy", 0.8),
    ("joyful", 0.8),
    ("joyous", 0.8),
    ("cheerful", 0.6),
    ("cheery", 0.6),
    ("jolly", 0.6),
    ("merry", 0.6),
    ("upbeat", 0.5),
    ("excited", 0.4),
    ("exciting", 0.3),
    ("excitement", 0.4),
    ("ecstatic", 0.9),
    ("elated", 0.85),
    ("euphoric", 0.85),
    ("overjoyed", 0.9),
    ("thrilled", 0.8),
    ("delighted", 0.7),
    ("delightful", 0.8),
    ("pumped", 0.5),
    ("stoked", 0.6),
    ("hyped", 0.4),
    ("giddy", 0.5),
    ("blissful", 0.8),
    ("bliss", 0.8),
    ("fun", 0.3),
    ("funny", 0.25),
    ("hilarious", 0.5),
    ("laughing", 0.4),
    ("smiling", 0.5),
    ("smile", 0.4),
    ("yay", 0.6),
    ("woohoo", 0.7),
    // general approval
    ("good", 0.7),
    ("great", 0.8),
    ("greatest", 1.0),
    ("nice", 0.6),
    ("lovely", 0.5),
    ("awesome", 1.0),
    ("amazing", 0.6),
    ("wonderful", 1.0),
    ("fantastic", 0.4),
    ("fabulous", 0.6),
    ("terrific", 0.6),
    ("superb", 1.0),
    ("excellent", 1.0),
    ("outstanding", 0.7),
    ("brilliant", 0.9),
    ("incredible", 0.9),
    ("marvelous", 0.8),
    ("perfect", 1.0),
    ("best", 1.0),
    ("better", 0.5),
    ("cool", 0.35),
    ("sweet", 0.35),
    ("beautiful", 0.85),
    ("gorgeous", 0.7),
    ("pleasant", 0.6),
    ("positive", 0.45),
    ("fine", 0.4),
    ("alright", 0.2),
    ("okay", 0.2),
    ("ok", 0.2),
    ("decent", 0.3),
    // love, connection
    ("love", 0.5),
    ("loved", 0.7),
    ("loving", 0.6),
    ("adore", 0.6),
    ("cared", 0.4),
    ("supported", 0.4),
    ("appreciated", 0.6),
    ("connected", 0.3),
    ("welcome", 0.5),
    ("friendly", 0.4),
    // calm, contentment
    ("calm", 0.3),
    ("relaxed", 0.4),
    ("relaxing", 0.4),
    ("peaceful", 0.5),
    ("serene", 0.5),
    ("content", 0.3),
    ("comfortable", 0.4),
    ("cozy", 0.4),
    ("rested", 0.4),
    ("refreshed", 0.5),
    ("relieved", 0.4),
    ("safe", 0.4),
    ("secure", 0.4),
    ("satisfied", 0.5),
    ("fulfilled", 0.6),
    // pride, gratitude, hope
    ("proud", 0.8),
    ("grateful", 0.6),
    ("thankful", 0.6),
    ("blessed", 0.5),
    ("lucky", 0.5),
    ("hopeful", 0.5),
    ("optimistic", 0.5),
    ("confident", 0.5),
    ("inspired", 0.6),
    ("motivated", 0.5),
    ("determined", 0.4),
    ("energetic", 0.4),
    ("energized", 0.5),
    ("productive", 0.4),
    ("accomplished", 0.6),
    ("successful", 0.75),
    ("success", 0.6),
    ("strong", 0.4),
    ("free", 0.4),
    ("alive", 0.4),
    ("awake", 0.1),
    // events
    ("passed", 0.3),
    ("aced", 0.6),
    ("win", 0.8),
    ("won", 0.8),
    ("winning", 0.6),
    ("enjoy", 0.4),
    ("enjoyed", 0.4),
    ("enjoying", 0.4),
    ("pleased", 0.5),
    ("celebrate", 0.5),
    ("celebrating", 0.5),
    ("promoted", 0.6),
    ("nailed", 0.6),
    ("improving", 0.4),
    ("improved", 0.4),
    ("healthy", 0.5),
    // sadness
    ("sad", -0.5),
    ("sadder", -0.6),
    ("saddest", -0.8),
    ("sadness", -0.6),
    ("unhappy", -0.6),
    ("down", -0.4),
    ("low", -0.3),
    ("blue", -0.3),
    ("gloomy", -0.6),
    ("glum", -0.5),
    ("sorrow", -0.7),
    ("sorrowful", -0.7),
    ("grief", -0.8),
    ("grieving", -0.8),
    ("mourning", -0.7),
    ("heartbroken", -0.9),
    ("heartbreak", -0.9),
    ("devastated", -0.9),
    ("crushed", -0.7),
    ("miserable", -1.0),
    ("depressed", -0.6),
    ("depressing", -0.6),
    ("depression", -0.7),
    ("hopeless", -0.8),
    ("helpless", -0.6),
    ("worthless", -0.8),
    ("useless", -0.6),
    ("empty", -0.1),
    ("numb", -0.4),
    ("lonely", -0.5),
    ("alone", -0.3),
    ("isolated", -0.5),
    ("abandoned", -0.6),
    ("rejected", -0.6),
    ("unloved", -0.7),
    ("homesick", -0.4),
    ("cry", -0.4),
    ("cried", -0.5),
    ("crying", -0.4),
    ("tears", -0.4),
    ("hurt", -0.5),
    ("hurting", -0.6),
    ("broken", -0.6),
    ("lost", -0.3),
    ("regret", -0.5),
    ("guilty", -0.5),
    ("ashamed", -0.6),
    ("embarrassed", -0.5),
    ("insecure", -0.5),
    ("disappointed", -0.75),
    ("disappointing", -0.6),
    ("meh", -0.1),
    // fear, stress
    ("anxious", -0.4),
    ("anxiety", -0.5),
    ("nervous", -0.3),
    ("worried", -0.4),
    ("worry", -0.4),
    ("scared", -0.5),
    ("afraid", -0.5),
    ("terrified", -0.8),
    ("frightened", -0.6),
    ("panicked", -0.7),
    ("panicking", -0.7),
    ("panic", -0.6),
    ("fear", -0.5),
    ("dread", -0.6),
    ("stressed", -0.5),
    ("stressful", -0.5),
    ("stress", -0.4),
    ("overwhelmed", -0.5),
    ("overwhelming", -0.5),
    ("pressured", -0.4),
    ("tense", -0.4),
    ("uneasy", -0.4),
    ("restless", -0.3),
    ("confused", -0.3),
    ("stuck", -0.4),
    ("burnt", -0.5),
    ("burned", -0.4),
    ("burnout", -0.6),
    // anger
    ("angry", -0.5),
    ("mad", -0.6),
    ("furious", -0.9),
    ("enraged", -0.9),
    ("livid", -0.8),
    ("pissed", -0.7),
    ("irritated", -0.5),
    ("irritating", -0.5),
    ("annoyed", -0.4),
    ("annoying", -0.5),
    ("frustrated", -0.6),
    ("frustrating", -0.6),
    ("resentful", -0.6),
    ("bitter", -0.5),
    ("hate", -0.8),
    ("hated", -0.8),
    ("hating", -0.8),
    ("disgusted", -0.7),
    ("jealous", -0.4),
    ("upset", -0.5),
    // fatigue, illness
    ("tired", -0.4),
    ("exhausted", -0.5),
    ("drained", -0.5),
    ("sleepy", -0.2),
    ("sleepless", -0.4),
    ("weary", -0.4),
    ("sick", -0.7),
    ("ill", -0.5),
    ("pain", -0.6),
    ("painful", -0.7),
    ("aching", -0.4),
    ("bored", -0.5),
    ("boring", -1.0),
    ("unmotivated", -0.5),
    ("lazy", -0.3),
    // general disapproval
    ("bad", -0.7),
    ("worse", -0.4),
    ("worst", -1.0),
    ("terrible", -1.0),
    ("awful", -1.0),
    ("horrible", -1.0),
    ("horrendous", -1.0),
    ("dreadful", -0.8),
    ("nasty", -0.7),
    ("rough", -0.4),
    ("sucks", -0.7),
    ("sucked", -0.7),
    ("crappy", -0.7),
    ("lousy", -0.6),
    ("trash", -0.6),
    ("ugly", -0.7),
    ("wrong", -0.5),
    ("poor", -0.4),
    ("broke", -0.4),
    ("difficult", -0.5),
    ("hard", -0.3),
    ("tough", -0.4),
    ("negative", -0.3),
    ("disaster", -0.8),
    ("mess", -0.5),
    ("ruined", -0.7),
    // events
    ("failed", -0.5),
    ("fail", -0.5),
    ("failing", -0.5),
    ("failure", -0.6),
    ("flunked", -0.6),
    ("dumped", -0.6),
    ("fired", -0.5),
    ("breakup", -0.6),
    ("died", -0.6),
    ("death", -0.6),
    ("fight", -0.4),
    ("argument", -0.3),
];

// (word, multiplier)
pub(super) const INTENSIFIERS: &[(&str, f64)] = &[
    ("very", 1.3),
    ("really", 1.3),
    ("so", 1.3),
    ("extremely", 1.5),
    ("super", 1.4),
    ("incredibly", 1.5),
    ("totally", 1.3),
    ("absolutely", 1.5),
    ("completely", 1.4),
    ("utterly", 1.5),
    ("deeply", 1.4),
    ("truly", 1.3),
    ("such", 1.2),
    ("too", 1.2),
    ("quite", 1.1),
    ("pretty", 1.1),
    ("slightly", 0.5),
    ("somewhat", 0.6),
    ("kinda", 0.7),
    ("sorta", 0.7),
    ("little", 0.7),
    ("bit", 0.7),
];

pub(super) const NEGATIONS: &[&str] = &[
    "not", "never", "no", "nor", "cannot", "hardly", "barely", "without", "nothing", "neither",
];
