// src/tokenizer/lexicon.rs
//! Irregular forms the suffix rules get wrong: (form, lemma), lowercase.

pub const LEMMA_EXCEPTIONS: &[(&str, &str)] = &[
    ("n't", "not"), ("ca", "can"), ("wo", "will"), ("sha", "shall"), ("am", "be"),
    ("are", "be"), ("is", "be"), ("was", "be"), ("were", "be"), ("been", "be"), ("being", "be"),
    ("has", "have"), ("had", "have"), ("having", "have"), ("does", "do"), ("did", "do"),
    ("done", "do"), ("doing", "do"), ("went", "go"), ("gone", "go"), ("goes", "go"),
    ("made", "make"), ("said", "say"), ("says", "say"), ("got", "get"), ("gotten", "get"),
    ("took", "take"), ("taken", "take"), ("came", "come"), ("saw", "see"), ("seen", "see"),
    ("knew", "know"), ("known", "know"), ("thought", "think"), ("told", "tell"),
    ("found", "find"), ("gave", "give"), ("given", "give"), ("felt", "feel"), ("left", "leave"),
    ("kept", "keep"), ("brought", "bring"), ("bought", "buy"), ("began", "begin"),
    ("begun", "begin"), ("ran", "run"), ("wrote", "write"), ("written", "write"),
    ("ate", "eat"), ("eaten", "eat"), ("sat", "sit"), ("stood", "stand"),
    ("understood", "understand"), ("heard", "hear"), ("held", "hold"), ("lost", "lose"),
    ("met", "meet"), ("paid", "pay"), ("sent", "send"), ("spent", "spend"), ("built", "build"),
    ("sold", "sell"), ("won", "win"), ("fell", "fall"), ("fallen", "fall"), ("broke", "break"),
    ("broken", "break"), ("chose", "choose"), ("chosen", "choose"), ("drove", "drive"),
    ("driven", "drive"), ("forgot", "forget"), ("forgotten", "forget"), ("flew", "fly"),
    ("flown", "fly"), ("grew", "grow"), ("grown", "grow"), ("threw", "throw"),
    ("thrown", "throw"), ("wore", "wear"), ("worn", "wear"), ("slept", "sleep"),
    ("spoke", "speak"), ("spoken", "speak"), ("taught", "teach"), ("caught", "catch"),
    ("fought", "fight"), ("sang", "sing"), ("sung", "sing"), ("swam", "swim"), ("hid", "hide"),
    ("hidden", "hide"), ("rode", "ride"), ("ridden", "ride"), ("woke", "wake"), ("led", "lead"),
    ("used", "use"), ("children", "child"), ("men", "man"), ("women", "woman"),
    ("people", "people"), ("mice", "mouse"), ("feet", "foot"), ("teeth", "tooth"),
    ("geese", "goose"), ("lives", "life"), ("wives", "wife"), ("knives", "knife"),
    ("leaves", "leaf"), ("movies", "movie"), ("series", "series"), ("news", "news"),
    ("during", "during"), ("nothing", "nothing"), ("something", "something"),
    ("anything", "anything"), ("everything", "everything"), ("morning", "morning"),
    ("evening", "evening"), ("thing", "thing"), ("things", "thing"), ("ceiling", "ceiling"),
    ("wedding", "wedding"), ("bring", "bring"), ("king", "king"), ("sing", "sing"),
    ("spring", "spring"), ("string", "string"), ("ring", "ring"), ("wing", "wing"),
    ("need", "need"), ("needed", "need"), ("feed", "feed"), ("speed", "speed"),
    ("indeed", "indeed"), ("agreed", "agree"), ("freed", "free"),
];
