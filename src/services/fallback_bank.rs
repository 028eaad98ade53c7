//! Pre-authored questions served whenever the model cannot be used.
//!
//! `draw` is infallible and deterministic: entry `i` of a draw is entry
//! `i % len` of the subject's list, stamped with the requested difficulty.

use crate::models::domain::{Difficulty, Question};

struct BankEntry {
    question: &'static str,
    options: [&'static str; 4],
    correct_answer: &'static str,
    explanation: &'static str,
    topic: &'static str,
}

impl BankEntry {
    fn to_question(&self, difficulty: Difficulty) -> Question {
        Question {
            question_text: self.question.to_string(),
            options: self.options.iter().map(|o| o.to_string()).collect(),
            correct_answer: self.correct_answer.to_string(),
            explanation: self.explanation.to_string(),
            topic: self.topic.to_string(),
            difficulty,
        }
    }
}

const MATHEMATICS: &[BankEntry] = &[
    BankEntry {
        question: "What is the result of 15 + 27?",
        options: ["A) 42", "B) 41", "C) 43", "D) 40"],
        correct_answer: "A",
        explanation: "15 + 27 = 42",
        topic: "Basic Arithmetic",
    },
    BankEntry {
        question: "What is the square root of 64?",
        options: ["A) 6", "B) 8", "C) 7", "D) 9"],
        correct_answer: "B",
        explanation: "8 × 8 = 64, so √64 = 8",
        topic: "Square Roots",
    },
    BankEntry {
        question: "What is the sum of the interior angles of a triangle?",
        options: ["A) 90°", "B) 360°", "C) 180°", "D) 270°"],
        correct_answer: "C",
        explanation: "The interior angles of any triangle in the plane add up to 180°",
        topic: "Geometry",
    },
];

const SCIENCE: &[BankEntry] = &[
    BankEntry {
        question: "What is the chemical symbol for water?",
        options: ["A) H2O", "B) CO2", "C) NaCl", "D) O2"],
        correct_answer: "A",
        explanation: "Water consists of two hydrogen atoms and one oxygen atom (H2O)",
        topic: "Chemistry",
    },
    BankEntry {
        question: "What planet is closest to the Sun?",
        options: ["A) Venus", "B) Earth", "C) Mercury", "D) Mars"],
        correct_answer: "C",
        explanation: "Mercury is the innermost planet in our solar system",
        topic: "Astronomy",
    },
    BankEntry {
        question: "What force keeps the planets in orbit around the Sun?",
        options: ["A) Magnetism", "B) Gravity", "C) Friction", "D) Electrostatic force"],
        correct_answer: "B",
        explanation: "The Sun's gravitational attraction keeps the planets in orbit",
        topic: "Physics",
    },
];

const HISTORY: &[BankEntry] = &[
    BankEntry {
        question: "In which year did World War II end?",
        options: ["A) 1944", "B) 1945", "C) 1946", "D) 1943"],
        correct_answer: "B",
        explanation: "World War II ended in 1945 with the surrender of Japan",
        topic: "World War II",
    },
    BankEntry {
        question: "Who was the first President of the United States?",
        options: [
            "A) Thomas Jefferson",
            "B) Abraham Lincoln",
            "C) John Adams",
            "D) George Washington",
        ],
        correct_answer: "D",
        explanation: "George Washington served as the first President from 1789 to 1797",
        topic: "American History",
    },
    BankEntry {
        question: "Which ancient civilization built the pyramids of Giza?",
        options: ["A) The Egyptians", "B) The Romans", "C) The Greeks", "D) The Aztecs"],
        correct_answer: "A",
        explanation: "The pyramids of Giza were built by the ancient Egyptians during the Old Kingdom",
        topic: "Ancient Civilizations",
    },
];

const LITERATURE: &[BankEntry] = &[
    BankEntry {
        question: "Who wrote 'Romeo and Juliet'?",
        options: [
            "A) Charles Dickens",
            "B) William Shakespeare",
            "C) Jane Austen",
            "D) Mark Twain",
        ],
        correct_answer: "B",
        explanation: "'Romeo and Juliet' is a tragedy written by William Shakespeare",
        topic: "Drama",
    },
    BankEntry {
        question: "Which novel begins with the line 'Call me Ishmael'?",
        options: ["A) Moby-Dick", "B) The Odyssey", "C) Treasure Island", "D) Robinson Crusoe"],
        correct_answer: "A",
        explanation: "Herman Melville's 'Moby-Dick' opens with 'Call me Ishmael'",
        topic: "Novels",
    },
    BankEntry {
        question: "What is a haiku traditionally made of?",
        options: [
            "A) Fourteen lines",
            "B) Two rhyming couplets",
            "C) Three lines of 5, 7 and 5 syllables",
            "D) A single free-verse stanza",
        ],
        correct_answer: "C",
        explanation: "A traditional haiku has three lines of five, seven and five syllables",
        topic: "Poetry",
    },
];

const GEOGRAPHY: &[BankEntry] = &[
    BankEntry {
        question: "What is the capital of France?",
        options: ["A) Lyon", "B) Marseille", "C) Paris", "D) Nice"],
        correct_answer: "C",
        explanation: "Paris is the capital and largest city of France",
        topic: "Capitals",
    },
    BankEntry {
        question: "Which is the largest ocean on Earth?",
        options: [
            "A) Atlantic Ocean",
            "B) Indian Ocean",
            "C) Arctic Ocean",
            "D) Pacific Ocean",
        ],
        correct_answer: "D",
        explanation: "The Pacific Ocean covers more area than all of Earth's land combined",
        topic: "Oceans",
    },
    BankEntry {
        question: "On which continent is the Sahara Desert?",
        options: ["A) Africa", "B) Asia", "C) Australia", "D) South America"],
        correct_answer: "A",
        explanation: "The Sahara spans much of North Africa",
        topic: "Physical Geography",
    },
];

const ART: &[BankEntry] = &[
    BankEntry {
        question: "Who painted the Mona Lisa?",
        options: [
            "A) Michelangelo",
            "B) Leonardo da Vinci",
            "C) Raphael",
            "D) Vincent van Gogh",
        ],
        correct_answer: "B",
        explanation: "Leonardo da Vinci painted the Mona Lisa in the early 16th century",
        topic: "Renaissance",
    },
    BankEntry {
        question: "Which colors are the traditional primary colors in painting?",
        options: [
            "A) Green, orange, purple",
            "B) Black, white, gray",
            "C) Red, yellow, blue",
            "D) Red, green, blue",
        ],
        correct_answer: "C",
        explanation: "Red, yellow and blue are the traditional painter's primaries",
        topic: "Color Theory",
    },
    BankEntry {
        question: "Which art movement is Salvador Dalí most associated with?",
        options: ["A) Surrealism", "B) Impressionism", "C) Cubism", "D) Baroque"],
        correct_answer: "A",
        explanation: "Dalí was a leading figure of the Surrealist movement",
        topic: "Modern Art",
    },
];

const MUSIC: &[BankEntry] = &[
    BankEntry {
        question: "How many lines does a standard musical staff have?",
        options: ["A) Four", "B) Five", "C) Six", "D) Seven"],
        correct_answer: "B",
        explanation: "The standard staff consists of five horizontal lines",
        topic: "Music Theory",
    },
    BankEntry {
        question: "Which composer wrote the 'Moonlight Sonata'?",
        options: [
            "A) Wolfgang Amadeus Mozart",
            "B) Johann Sebastian Bach",
            "C) Frédéric Chopin",
            "D) Ludwig van Beethoven",
        ],
        correct_answer: "D",
        explanation: "The 'Moonlight Sonata' is Beethoven's Piano Sonata No. 14",
        topic: "Classical Composers",
    },
    BankEntry {
        question: "Which instrument family does the trumpet belong to?",
        options: ["A) Brass", "B) Woodwind", "C) Percussion", "D) Strings"],
        correct_answer: "A",
        explanation: "The trumpet is a brass instrument played by buzzing the lips",
        topic: "Instruments",
    },
];

const PROGRAMMING: &[BankEntry] = &[
    BankEntry {
        question: "What does HTML stand for?",
        options: [
            "A) Hyper Trainer Marking Language",
            "B) HyperText Markup Language",
            "C) HighText Machine Language",
            "D) Hyperlink and Text Markup Language",
        ],
        correct_answer: "B",
        explanation: "HTML stands for HyperText Markup Language",
        topic: "Web Development",
    },
    BankEntry {
        question: "Which data structure follows last-in, first-out order?",
        options: ["A) Queue", "B) Linked list", "C) Stack", "D) Hash map"],
        correct_answer: "C",
        explanation: "A stack removes the most recently pushed element first",
        topic: "Data Structures",
    },
    BankEntry {
        question: "What is the time complexity of binary search on a sorted array?",
        options: ["A) O(log n)", "B) O(n)", "C) O(n log n)", "D) O(1)"],
        correct_answer: "A",
        explanation: "Binary search halves the search range on every step",
        topic: "Algorithms",
    },
];

const BIOLOGY: &[BankEntry] = &[
    BankEntry {
        question: "What is known as the powerhouse of the cell?",
        options: ["A) Nucleus", "B) Ribosome", "C) Golgi apparatus", "D) Mitochondrion"],
        correct_answer: "D",
        explanation: "Mitochondria produce most of the cell's ATP",
        topic: "Cell Biology",
    },
    BankEntry {
        question: "What molecule carries genetic information in most living organisms?",
        options: ["A) DNA", "B) ATP", "C) Glucose", "D) Collagen"],
        correct_answer: "A",
        explanation: "DNA stores the genetic instructions of most organisms",
        topic: "Genetics",
    },
    BankEntry {
        question: "Which gas do plants absorb during photosynthesis?",
        options: ["A) Oxygen", "B) Carbon dioxide", "C) Nitrogen", "D) Hydrogen"],
        correct_answer: "B",
        explanation: "Plants take in carbon dioxide and release oxygen during photosynthesis",
        topic: "Plant Biology",
    },
];

const BUSINESS: &[BankEntry] = &[
    BankEntry {
        question: "What does ROI stand for?",
        options: [
            "A) Rate of Inflation",
            "B) Revenue over Income",
            "C) Return on Investment",
            "D) Risk of Insolvency",
        ],
        correct_answer: "C",
        explanation: "ROI, return on investment, measures gain relative to cost",
        topic: "Finance",
    },
    BankEntry {
        question: "What is the basic accounting equation?",
        options: [
            "A) Assets = Liabilities + Equity",
            "B) Revenue = Profit - Expenses",
            "C) Equity = Assets + Liabilities",
            "D) Cash = Revenue - Debt",
        ],
        correct_answer: "A",
        explanation: "Everything a business owns is funded by liabilities or owners' equity",
        topic: "Accounting",
    },
    BankEntry {
        question: "In a market, what usually happens to price when demand rises and supply stays the same?",
        options: [
            "A) It falls",
            "B) It rises",
            "C) It stays the same",
            "D) It drops to zero",
        ],
        correct_answer: "B",
        explanation: "Higher demand against fixed supply pushes the equilibrium price up",
        topic: "Economics",
    },
];

const GENERAL: &[BankEntry] = &[
    BankEntry {
        question: "How many days are there in a leap year?",
        options: ["A) 364", "B) 365", "C) 366", "D) 367"],
        correct_answer: "C",
        explanation: "A leap year adds February 29th for a total of 366 days",
        topic: "General Knowledge",
    },
    BankEntry {
        question: "How many continents are there on Earth?",
        options: ["A) Five", "B) Six", "C) Eight", "D) Seven"],
        correct_answer: "D",
        explanation: "The seven continents are Africa, Antarctica, Asia, Australia, Europe, North America and South America",
        topic: "General Knowledge",
    },
    BankEntry {
        question: "What is the boiling point of water at sea level in Celsius?",
        options: ["A) 100°C", "B) 90°C", "C) 120°C", "D) 80°C"],
        correct_answer: "A",
        explanation: "At standard atmospheric pressure water boils at 100°C",
        topic: "General Knowledge",
    },
];

const SUBJECTS: &[(&str, &str, &[BankEntry])] = &[
    ("mathematics", "Mathematics", MATHEMATICS),
    ("science", "Science", SCIENCE),
    ("history", "History", HISTORY),
    ("literature", "Literature", LITERATURE),
    ("geography", "Geography", GEOGRAPHY),
    ("art", "Art", ART),
    ("music", "Music", MUSIC),
    ("programming", "Programming", PROGRAMMING),
    ("biology", "Biology", BIOLOGY),
    ("business", "Business", BUSINESS),
];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SubjectInfo {
    pub id: &'static str,
    pub name: &'static str,
}

#[derive(Debug, Clone, Copy, Default)]
pub struct FallbackBank;

impl FallbackBank {
    pub fn new() -> Self {
        FallbackBank
    }

    pub fn subjects(&self) -> Vec<SubjectInfo> {
        SUBJECTS
            .iter()
            .map(|&(id, name, _)| SubjectInfo { id, name })
            .collect()
    }

    pub fn has_subject(&self, subject: &str) -> bool {
        lookup(subject).is_some()
    }

    /// Number of distinct entries `draw` cycles through for `subject`.
    pub fn cycle_len(&self, subject: &str) -> usize {
        entries_for(subject).len()
    }

    pub fn draw(&self, subject: &str, difficulty: Difficulty, count: usize) -> Vec<Question> {
        let entries = entries_for(subject);
        (0..count)
            .map(|i| entries[i % entries.len()].to_question(difficulty))
            .collect()
    }
}

fn lookup(subject: &str) -> Option<&'static [BankEntry]> {
    let key = subject.trim();
    SUBJECTS
        .iter()
        .find(|(id, name, _)| id.eq_ignore_ascii_case(key) || name.eq_ignore_ascii_case(key))
        .map(|(_, _, entries)| *entries)
}

fn entries_for(subject: &str) -> &'static [BankEntry] {
    lookup(subject).unwrap_or(GENERAL)
}
