//! The static question bank.
//!
//! Forty questions, read-only: ids 1-20 general knowledge, ids 21-40
//! mental arithmetic. Sessions draw their samples from here and never
//! mutate the bank.

use serde::{Deserialize, Serialize};

/// Questions in the bank.
pub const BANK_SIZE: usize = 40;
/// Questions drawn per quiz session.
pub const SAMPLE_SIZE: usize = 10;

/// One multiple-choice question with exactly four options.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Question {
    pub id: u32,
    pub prompt: String,
    pub options: [String; 4],
    /// Index into `options`, 0..=3.
    pub correct_index: usize,
}

fn q(id: u32, prompt: &str, options: [&str; 4], correct_index: usize) -> Question {
    Question {
        id,
        prompt: prompt.into(),
        options: options.map(String::from),
        correct_index,
    }
}

/// The full 40-question bank, in id order.
pub fn question_bank() -> Vec<Question> {
    vec![
        // General knowledge
        q(
            1,
            "What is the capital of France?",
            ["London", "Berlin", "Paris", "Madrid"],
            2,
        ),
        q(
            2,
            "Which planet is known as the Red Planet?",
            ["Venus", "Mars", "Jupiter", "Saturn"],
            1,
        ),
        q(
            3,
            "Who painted the Mona Lisa?",
            ["Van Gogh", "Picasso", "Da Vinci", "Monet"],
            2,
        ),
        q(
            4,
            "What is the largest ocean on Earth?",
            ["Atlantic", "Indian", "Arctic", "Pacific"],
            3,
        ),
        q(
            5,
            "Which country is known as the Land of the Rising Sun?",
            ["China", "Japan", "Korea", "Thailand"],
            1,
        ),
        q(
            6,
            "What is the chemical symbol for gold?",
            ["Go", "Gd", "Au", "Ag"],
            2,
        ),
        q(
            7,
            "Which gas makes up most of Earth's atmosphere?",
            ["Oxygen", "Carbon Dioxide", "Nitrogen", "Hydrogen"],
            2,
        ),
        q(
            8,
            "What is the smallest country in the world?",
            ["Monaco", "Vatican City", "Liechtenstein", "San Marino"],
            1,
        ),
        q(
            9,
            "Which element has the atomic number 1?",
            ["Helium", "Hydrogen", "Lithium", "Carbon"],
            1,
        ),
        q(
            10,
            "What is the currency of Japan?",
            ["Won", "Yuan", "Yen", "Baht"],
            2,
        ),
        q(
            11,
            "Which mountain is the highest in the world?",
            ["K2", "Mount Everest", "Kangchenjunga", "Lhotse"],
            1,
        ),
        q(
            12,
            "What is the largest mammal in the world?",
            ["African Elephant", "Blue Whale", "Giraffe", "Hippopotamus"],
            1,
        ),
        q(
            13,
            "Which planet is closest to the Sun?",
            ["Venus", "Mercury", "Earth", "Mars"],
            1,
        ),
        q(
            14,
            "What is the longest river in the world?",
            ["Amazon", "Nile", "Yangtze", "Mississippi"],
            1,
        ),
        q(
            15,
            "Which country has the most natural lakes?",
            ["Russia", "Canada", "Finland", "United States"],
            1,
        ),
        q(
            16,
            "What is the hardest natural substance on Earth?",
            ["Gold", "Iron", "Diamond", "Quartz"],
            2,
        ),
        q(
            17,
            "Which organ produces insulin?",
            ["Liver", "Pancreas", "Kidney", "Stomach"],
            1,
        ),
        q(
            18,
            "What is the speed of light in vacuum?",
            ["300,000 km/s", "150,000 km/s", "450,000 km/s", "600,000 km/s"],
            0,
        ),
        q(
            19,
            "Which country is home to the kangaroo?",
            ["New Zealand", "Australia", "South Africa", "Brazil"],
            1,
        ),
        q(
            20,
            "What is the largest desert in the world?",
            ["Gobi", "Sahara", "Antarctic", "Arabian"],
            2,
        ),
        // Mental arithmetic
        q(21, "What is 15 × 8?", ["120", "110", "130", "140"], 0),
        q(22, "What is the square root of 64?", ["6", "7", "8", "9"], 2),
        q(23, "What is 25% of 200?", ["40", "50", "60", "75"], 1),
        q(24, "What is 7² + 3²?", ["58", "52", "49", "56"], 0),
        q(
            25,
            "What is the value of π (pi) to 2 decimal places?",
            ["3.14", "3.15", "3.16", "3.13"],
            0,
        ),
        q(26, "What is 144 ÷ 12?", ["10", "11", "12", "13"], 2),
        q(
            27,
            "What is 5! (5 factorial)?",
            ["100", "120", "150", "200"],
            1,
        ),
        q(
            28,
            "What is the area of a circle with radius 7? (Use π = 22/7)",
            ["154", "147", "161", "168"],
            0,
        ),
        q(29, "What is 2³ + 3²?", ["15", "17", "19", "21"], 1),
        q(
            30,
            "What is the next number in the sequence: 2, 4, 8, 16, ?",
            ["24", "32", "28", "20"],
            1,
        ),
        q(31, "What is 1/2 + 1/4?", ["1/6", "2/6", "3/4", "1/4"], 2),
        q(
            32,
            "What is the perimeter of a square with side length 5?",
            ["20", "25", "15", "10"],
            0,
        ),
        q(33, "What is 3 × 4 + 2 × 5?", ["22", "24", "26", "28"], 0),
        q(
            34,
            "What is the greatest common factor of 12 and 18?",
            ["3", "6", "9", "12"],
            1,
        ),
        q(35, "What is 0.5 × 0.2?", ["0.1", "0.01", "1.0", "0.2"], 0),
        q(
            36,
            "What is the slope of the line y = 2x + 3?",
            ["2", "3", "5", "1"],
            0,
        ),
        q(37, "What is 10% of 150?", ["10", "15", "20", "25"], 1),
        q(
            38,
            "What is the volume of a cube with side length 3?",
            ["9", "18", "27", "36"],
            2,
        ),
        q(39, "What is 2 + 2 × 3?", ["8", "12", "10", "6"], 0),
        q(
            40,
            "What is the median of 1, 3, 5, 7, 9?",
            ["3", "5", "7", "9"],
            1,
        ),
    ]
}
