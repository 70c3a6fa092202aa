#![forbid(unsafe_code)]

//! Built-in sample dataset.
//!
//! A compact English dataset covering every standard category. Hosts with a
//! full dataset load it through [`Dataset::from_json`](crate::Dataset::from_json)
//! instead.

use crate::dataset::{Category, Dataset};
use crate::record::EmojiRecord;

type Entry = (&'static str, &'static str, &'static str, &'static str);

const SMILEYS: &[Entry] = &[
    ("😀", "grinning face", ":grinning:", ""),
    ("😃", "grinning face with big eyes", ":smiley:", ""),
    ("😄", "grinning face with smiling eyes", ":smile:", ""),
    ("😁", "beaming face with smiling eyes", ":grin:", ""),
    ("😆", "grinning squinting face", ":laughing:", ""),
    ("😅", "grinning face with sweat", ":sweat_smile:", ""),
    ("🤣", "rolling on the floor laughing", ":rofl:", ""),
    ("😂", "face with tears of joy", ":joy:", ""),
    ("🙂", "slightly smiling face", ":slightly_smiling_face:", ""),
    ("🙃", "upside-down face", ":upside_down_face:", ""),
    ("😉", "winking face", ":wink:", ""),
    ("😊", "smiling face with smiling eyes", ":blush:", ""),
    ("😇", "smiling face with halo", ":innocent:", ""),
    ("🥰", "smiling face with hearts", ":smiling_face_with_three_hearts:", ""),
    ("😍", "smiling face with heart-eyes", ":heart_eyes:", ""),
    ("😘", "face blowing a kiss", ":kissing_heart:", ""),
    ("😋", "face savoring food", ":yum:", ""),
    ("😎", "smiling face with sunglasses", ":sunglasses:", ""),
    ("🤔", "thinking face", ":thinking:", ""),
    ("😐", "neutral face", ":neutral_face:", ""),
    ("😴", "sleeping face", ":sleeping:", ""),
    ("😢", "crying face", ":cry:", ""),
    ("😭", "loudly crying face", ":sob:", ""),
    ("😡", "pouting face", ":rage:", ""),
];

const PEOPLE: &[Entry] = &[
    ("👋", "waving hand", ":wave:", "s"),
    ("🤚", "raised back of hand", ":raised_back_of_hand:", "s"),
    ("✋", "raised hand", ":raised_hand:", "s"),
    ("👌", "OK hand", ":ok_hand:", "s"),
    ("✌️", "victory hand", ":v:", "s"),
    ("🤞", "crossed fingers", ":crossed_fingers:", "s"),
    ("👍", "thumbs up", ":+1:", "s"),
    ("👎", "thumbs down", ":-1:", "s"),
    ("👏", "clapping hands", ":clap:", "s"),
    ("🙌", "raising hands", ":raised_hands:", "s"),
    ("🙏", "folded hands", ":pray:", "s"),
    ("💪", "flexed biceps", ":muscle:", "s"),
    ("👀", "eyes", ":eyes:", ""),
    ("👶", "baby", ":baby:", "s"),
    ("🧑", "person", ":adult:", "s"),
    ("👩‍💻", "woman technologist", ":woman_technologist:", "s"),
];

const NATURE: &[Entry] = &[
    ("🐶", "dog face", ":dog:", ""),
    ("🐱", "cat face", ":cat:", ""),
    ("🐭", "mouse face", ":mouse:", ""),
    ("🦊", "fox", ":fox_face:", ""),
    ("🐻", "bear", ":bear:", ""),
    ("🐼", "panda", ":panda_face:", ""),
    ("🦁", "lion", ":lion:", ""),
    ("🐸", "frog", ":frog:", ""),
    ("🦀", "crab", ":crab:", ""),
    ("🌵", "cactus", ":cactus:", ""),
    ("🌲", "evergreen tree", ":evergreen_tree:", ""),
    ("🌸", "cherry blossom", ":cherry_blossom:", ""),
];

const FOOD: &[Entry] = &[
    ("🍏", "green apple", ":green_apple:", ""),
    ("🍎", "red apple", ":apple:", ""),
    ("🍌", "banana", ":banana:", ""),
    ("🍉", "watermelon", ":watermelon:", ""),
    ("🍕", "pizza", ":pizza:", ""),
    ("🍔", "hamburger", ":hamburger:", ""),
    ("🌮", "taco", ":taco:", ""),
    ("🍣", "sushi", ":sushi:", ""),
    ("☕", "hot beverage", ":coffee:", ""),
    ("🍺", "beer mug", ":beer:", ""),
];

const TRAVEL: &[Entry] = &[
    ("🚗", "automobile", ":car:", ""),
    ("🚲", "bicycle", ":bike:", ""),
    ("✈️", "airplane", ":airplane:", ""),
    ("🚀", "rocket", ":rocket:", ""),
    ("🏠", "house", ":house:", ""),
    ("🏖️", "beach with umbrella", ":beach_umbrella:", ""),
    ("🗽", "Statue of Liberty", ":statue_of_liberty:", ""),
    ("🌋", "volcano", ":volcano:", ""),
];

const ACTIVITIES: &[Entry] = &[
    ("⚽", "soccer ball", ":soccer:", ""),
    ("🏀", "basketball", ":basketball:", ""),
    ("🎾", "tennis", ":tennis:", ""),
    ("🎉", "party popper", ":tada:", ""),
    ("🎁", "wrapped gift", ":gift:", ""),
    ("🎮", "video game", ":video_game:", ""),
    ("🎲", "game die", ":game_die:", ""),
    ("🏄", "person surfing", ":surfer:", "s"),
    ("🚴", "person biking", ":bicyclist:", "s"),
];

const OBJECTS: &[Entry] = &[
    ("💡", "light bulb", ":bulb:", ""),
    ("📱", "mobile phone", ":iphone:", ""),
    ("💻", "laptop", ":computer:", ""),
    ("⌚", "watch", ":watch:", ""),
    ("📷", "camera", ":camera:", ""),
    ("📚", "books", ":books:", ""),
    ("✏️", "pencil", ":pencil2:", ""),
    ("🔑", "key", ":key:", ""),
    ("🔨", "hammer", ":hammer:", ""),
];

const SYMBOLS: &[Entry] = &[
    ("❤️", "red heart", ":heart:", ""),
    ("💔", "broken heart", ":broken_heart:", ""),
    ("✅", "check mark button", ":white_check_mark:", ""),
    ("❌", "cross mark", ":x:", ""),
    ("⚠️", "warning", ":warning:", ""),
    ("#️⃣", "keycap: #", ":hash:", ""),
    ("1️⃣", "keycap: 1", ":one:", ""),
    ("♻️", "recycling symbol", ":recycle:", ""),
];

const FLAGS: &[Entry] = &[
    ("🏁", "chequered flag", ":checkered_flag:", ""),
    ("🏳️‍🌈", "rainbow flag", ":rainbow_flag:", ""),
    ("🇩🇪", "flag: Germany", ":de:", ""),
    ("🇫🇷", "flag: France", ":fr:", ""),
    ("🇯🇵", "flag: Japan", ":jp:", ""),
    ("🇺🇸", "flag: United States", ":us:", ""),
];

const CATEGORIES: &[(&str, &[Entry])] = &[
    ("Smileys & Emotion", SMILEYS),
    ("People & Body", PEOPLE),
    ("Animals & Nature", NATURE),
    ("Food & Drink", FOOD),
    ("Travel & Places", TRAVEL),
    ("Activities", ACTIVITIES),
    ("Objects", OBJECTS),
    ("Symbols", SYMBOLS),
    ("Flags", FLAGS),
];

/// Built-in categories in display order.
#[must_use]
pub fn categories() -> Vec<Category> {
    CATEGORIES
        .iter()
        .map(|(name, entries)| {
            let emojis = entries
                .iter()
                .map(|&(glyph, desc, code, mods)| EmojiRecord::new(glyph, desc, code, mods))
                .collect();
            Category::new(*name, emojis)
        })
        .collect()
}

/// The built-in dataset.
///
/// # Panics
///
/// Never in practice: the tables above are checked by the unit tests.
#[must_use]
pub fn dataset() -> Dataset {
    Dataset::new(categories()).expect("built-in emoji tables are valid")
}
