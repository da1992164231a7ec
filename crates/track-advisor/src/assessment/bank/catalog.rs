use super::super::domain::{Domain, OptionKey, Question, QuestionOption};

pub(super) fn standard_questions() -> Vec<Question> {
    vec![
        // Verbal
        question(
            1,
            Domain::Verbal,
            "Which word is MOST similar in meaning to CALM?",
            ["Angry", "Peaceful", "Loud", "Fast"],
            OptionKey::B,
        ),
        question(
            2,
            Domain::Verbal,
            "Which is the BEST title for a story about a student who helps his community during a flood?",
            ["The Sleepy Boy", "The Lost Bag", "The Helpful Hero", "The Broken Chair"],
            OptionKey::C,
        ),
        question(
            3,
            Domain::Verbal,
            "Which word is the OPPOSITE of BRAVE?",
            ["Afraid", "Strong", "Happy", "Calm"],
            OptionKey::A,
        ),
        question(
            4,
            Domain::Verbal,
            "Choose the sentence with correct grammar.",
            [
                "She don’t like fruits.",
                "She doesn’t likes fruits.",
                "She doesn’t like fruits.",
                "She not like fruits.",
            ],
            OptionKey::C,
        ),
        question(
            5,
            Domain::Verbal,
            "Which word BEST completes the sentence: The teacher was very ____ with the noisy class.",
            ["patient", "patiently", "patience", "patientness"],
            OptionKey::A,
        ),
        question(
            6,
            Domain::Verbal,
            "Which pair of words are SYNONYMS?",
            ["Hot – Cold", "Quick – Fast", "Loud – Quiet", "Big – Small"],
            OptionKey::B,
        ),
        question(
            7,
            Domain::Verbal,
            "Which sentence is PUNCTUATED correctly?",
            [
                "Where are you going, Ana?",
                "Where are you going Ana.",
                "Where are you going Ana?",
                "Where are you going? Ana",
            ],
            OptionKey::A,
        ),
        question(
            8,
            Domain::Verbal,
            "Which word BEST completes the sentence: He is the ____ student in the class.",
            ["more tall", "most tall", "tallest", "taller"],
            OptionKey::C,
        ),
        question(
            9,
            Domain::Verbal,
            "Which of these is a PROVERB?",
            ["I am hungry.", "Practice makes perfect.", "The sun is bright.", "She likes music."],
            OptionKey::B,
        ),
        question(
            10,
            Domain::Verbal,
            "Which sentence shows a CAUSE and EFFECT relationship?",
            [
                "He read a book.",
                "She sings beautifully.",
                "It rained, so the streets were wet.",
                "They play basketball.",
            ],
            OptionKey::C,
        ),
        question(
            11,
            Domain::Verbal,
            "The idiom “raining cats and dogs” means:",
            [
                "There are many animals outside.",
                "It is raining very hard.",
                "There are no clouds.",
                "It is hot and sunny.",
            ],
            OptionKey::B,
        ),
        question(
            12,
            Domain::Verbal,
            "Which word BEST completes the sentence: Please ____ your name on the line.",
            ["write", "right", "wrote", "written"],
            OptionKey::A,
        ),
        question(
            13,
            Domain::Verbal,
            "Which sentence is written in the FUTURE tense?",
            [
                "She cooks dinner.",
                "She cooked dinner.",
                "She will cook dinner.",
                "She is cooking dinner.",
            ],
            OptionKey::C,
        ),
        question(
            14,
            Domain::Verbal,
            "Choose the CORRECT plural form.",
            ["childs", "childes", "children", "childrens"],
            OptionKey::C,
        ),
        question(
            15,
            Domain::Verbal,
            "Which word BEST completes the sentence: Liza felt ____ after passing the entrance exam.",
            ["joy", "joyful", "joyfully", "joyfulness"],
            OptionKey::B,
        ),
        question(
            16,
            Domain::Verbal,
            "Which sentence uses the correct form of the verb?",
            [
                "They was playing outside.",
                "They were play outside.",
                "They were playing outside.",
                "They playing outside.",
            ],
            OptionKey::C,
        ),
        question(
            17,
            Domain::Verbal,
            "Which word is a SYNONYM of “difficult”?",
            ["Easy", "Hard", "Simple", "Light"],
            OptionKey::B,
        ),
        question(
            18,
            Domain::Verbal,
            "Which word is the OPPOSITE of “polite”?",
            ["Kind", "Rude", "Friendly", "Gentle"],
            OptionKey::B,
        ),
        question(
            19,
            Domain::Verbal,
            "Choose the sentence with the correct subject–verb agreement.",
            [
                "The group of students are noisy.",
                "The group of students is noisy.",
                "The groups of student is noisy.",
                "The groups of student are noisy.",
            ],
            OptionKey::B,
        ),
        question(
            20,
            Domain::Verbal,
            "Which word BEST completes the sentence: She is known for her ____ in solving complex problems.",
            ["creative", "creativity", "creatively", "creation"],
            OptionKey::B,
        ),
        question(
            21,
            Domain::Verbal,
            "Which of the following is an IDIOM?",
            [
                "The room is very dark.",
                "He has a heart of gold.",
                "She studies every night.",
                "They live in Manila.",
            ],
            OptionKey::B,
        ),
        question(
            22,
            Domain::Verbal,
            "What does the idiom “break the ice” mean?",
            ["Start a conversation", "Break something cold", "End a friendship", "Leave the room"],
            OptionKey::A,
        ),
        question(
            23,
            Domain::Verbal,
            "Which sentence is written in the PAST tense?",
            [
                "He will join the team.",
                "He joins the team.",
                "He joined the team.",
                "He is joining the team.",
            ],
            OptionKey::C,
        ),
        question(
            24,
            Domain::Verbal,
            "Which word BEST completes the sentence: The instructions were very ____ and easy to follow.",
            ["clarity", "clearly", "clear", "clearness"],
            OptionKey::C,
        ),
        question(
            25,
            Domain::Verbal,
            "Which sentence contains a SIMILE?",
            [
                "The classroom was a jungle.",
                "Her smile is like the sun.",
                "The wind whispered softly.",
                "Time is a thief.",
            ],
            OptionKey::B,
        ),
        question(
            26,
            Domain::Verbal,
            "Which pair of words are ANTONYMS?",
            ["Big – Large", "Happy – Joyful", "Begin – Start", "Fast – Slow"],
            OptionKey::D,
        ),
        question(
            27,
            Domain::Verbal,
            "Which word BEST completes the sentence: The film was so ____ that I recommended it to my classmates.",
            ["interest", "interesting", "interested", "interests"],
            OptionKey::B,
        ),
        question(
            28,
            Domain::Verbal,
            "Choose the correctly punctuated sentence.",
            [
                "Maria Jose and Leo went to the mall.",
                "Maria, Jose and Leo went to the mall.",
                "Maria Jose, and Leo went to the mall.",
                "Maria, Jose, and, Leo went to the mall.",
            ],
            OptionKey::B,
        ),
        question(
            29,
            Domain::Verbal,
            "Which of the following is a FACT?",
            [
                "Chocolate ice cream is the best flavor.",
                "The Philippines is in Southeast Asia.",
                "Singing is more fun than dancing.",
                "Math is the hardest subject.",
            ],
            OptionKey::B,
        ),
        question(
            30,
            Domain::Verbal,
            "Which of the following is an OPINION?",
            [
                "Water boils at 100°C at sea level.",
                "Cebu is an island in the Philippines.",
                "Science is more exciting than History.",
                "The human heart has four chambers.",
            ],
            OptionKey::C,
        ),

        // Numerical
        question(
            31,
            Domain::Numerical,
            "What is 3/4 of 32?",
            ["16", "20", "24", "28"],
            OptionKey::C,
        ),
        question(
            32,
            Domain::Numerical,
            "If a shirt costs ₱350 and is discounted by 20%, what is the new price?",
            ["₱70", "₱280", "₱300", "₱320"],
            OptionKey::B,
        ),
        question(
            33,
            Domain::Numerical,
            "What is 15 × 12?",
            ["160", "170", "180", "190"],
            OptionKey::C,
        ),
        question(
            34,
            Domain::Numerical,
            "Solve: 120 ÷ 8 = ?",
            ["12", "14", "15", "16"],
            OptionKey::C,
        ),
        question(
            35,
            Domain::Numerical,
            "Which is the SMALLEST number?",
            ["0.9", "0.45", "0.5", "0.75"],
            OptionKey::B,
        ),
        question(
            36,
            Domain::Numerical,
            "What is 25% of 200?",
            ["25", "40", "50", "75"],
            OptionKey::C,
        ),
        question(
            37,
            Domain::Numerical,
            "Solve: 7² = ?",
            ["14", "42", "49", "77"],
            OptionKey::C,
        ),
        question(
            38,
            Domain::Numerical,
            "Which fraction is equivalent to 0.5?",
            ["1/3", "1/4", "1/2", "2/3"],
            OptionKey::C,
        ),
        question(
            39,
            Domain::Numerical,
            "A rectangle is 8 cm long and 5 cm wide. What is its area?",
            ["13 cm²", "20 cm²", "30 cm²", "40 cm²"],
            OptionKey::D,
        ),
        question(
            40,
            Domain::Numerical,
            "If you have ₱500 and you spend ₱275, how much is left?",
            ["₱125", "₱200", "₱225", "₱250"],
            OptionKey::C,
        ),
        question(
            41,
            Domain::Numerical,
            "Solve: (18 + 12) ÷ 5 = ?",
            ["5", "6", "7", "8"],
            OptionKey::B,
        ),
        question(
            42,
            Domain::Numerical,
            "What is the next term: 4, 7, 10, 13, ___?",
            ["14", "16", "17", "20"],
            OptionKey::B,
        ),
        question(
            43,
            Domain::Numerical,
            "If 3x = 21, what is x?",
            ["5", "6", "7", "9"],
            OptionKey::C,
        ),
        question(
            44,
            Domain::Numerical,
            "The average of 10 and 14 is:",
            ["11", "12", "13", "24"],
            OptionKey::B,
        ),
        question(
            45,
            Domain::Numerical,
            "Solve: 2x + 5 = 17. What is x?",
            ["5", "6", "7", "8"],
            OptionKey::B,
        ),
        question(
            46,
            Domain::Numerical,
            "A student scored 18, 20, 22, and 20 in four quizzes. What is the MEAN score?",
            ["19", "20", "21", "22"],
            OptionKey::B,
        ),
        question(
            47,
            Domain::Numerical,
            "Which is equal to 3/5?",
            ["6/10", "9/20", "12/25", "15/30"],
            OptionKey::A,
        ),
        question(
            48,
            Domain::Numerical,
            "If a jeepney fare is ₱13 for the first 4 km and ₱2 for every additional km, how much is the fare for 7 km?",
            ["₱17", "₱19", "₱21", "₱23"],
            OptionKey::B,
        ),
        question(
            49,
            Domain::Numerical,
            "What is 15% of 600?",
            ["60", "75", "80", "90"],
            OptionKey::D,
        ),
        question(
            50,
            Domain::Numerical,
            "Which of the following is a RATIO equivalent to 2:3?",
            ["4:5", "6:9", "8:10", "10:14"],
            OptionKey::B,
        ),
        question(
            51,
            Domain::Numerical,
            "A phone originally costs ₱10,000 and is now on sale for ₱8,500. How much is the discount?",
            ["₱500", "₱1,000", "₱1,500", "₱2,000"],
            OptionKey::C,
        ),
        question(
            52,
            Domain::Numerical,
            "What is 0.25 written as a fraction in simplest form?",
            ["1/2", "1/3", "1/4", "2/5"],
            OptionKey::C,
        ),
        question(
            53,
            Domain::Numerical,
            "A triangle has sides 6 cm, 8 cm, and 10 cm. What is its perimeter?",
            ["20 cm", "22 cm", "24 cm", "26 cm"],
            OptionKey::C,
        ),
        question(
            54,
            Domain::Numerical,
            "If 4 notebooks cost ₱120 in total, what is the price of one notebook?",
            ["₱20", "₱25", "₱30", "₱40"],
            OptionKey::C,
        ),
        question(
            55,
            Domain::Numerical,
            "Which of the following is the SIMPLE INTEREST on ₱5,000 at 4% per year for 2 years?",
            ["₱200", "₱300", "₱400", "₱500"],
            OptionKey::A,
        ),
        question(
            56,
            Domain::Numerical,
            "Which is the median of 5, 8, 3, 10, 2?",
            ["3", "5", "8", "10"],
            OptionKey::B,
        ),
        question(
            57,
            Domain::Numerical,
            "Solve: 9(2x − 1) = 45. What is x?",
            ["2", "2.5", "3", "3.5"],
            OptionKey::C,
        ),
        question(
            58,
            Domain::Numerical,
            "A student got 45 points out of 60 in a test. What is his score in percent?",
            ["60%", "70%", "75%", "80%"],
            OptionKey::C,
        ),
        question(
            59,
            Domain::Numerical,
            "Which of the following is 3/8 written as a decimal?",
            ["0.25", "0.3", "0.375", "0.4"],
            OptionKey::C,
        ),
        question(
            60,
            Domain::Numerical,
            "The sides of a square are 9 cm long. What is its area?",
            ["18 cm²", "36 cm²", "81 cm²", "90 cm²"],
            OptionKey::C,
        ),

        // Scientific
        question(
            61,
            Domain::Scientific,
            "Which energy transformation happens when you turn on an electric fan?",
            ["Chemical to light", "Electrical to mechanical", "Heat to sound", "Light to chemical"],
            OptionKey::B,
        ),
        question(
            62,
            Domain::Scientific,
            "Which of the following is a renewable source of energy?",
            ["Coal", "Oil", "Solar", "Natural gas"],
            OptionKey::C,
        ),
        question(
            63,
            Domain::Scientific,
            "Water changes from liquid to gas in which process?",
            ["Condensation", "Evaporation", "Freezing", "Melting"],
            OptionKey::B,
        ),
        question(
            64,
            Domain::Scientific,
            "Which organ is responsible for pumping blood in the human body?",
            ["Lungs", "Heart", "Brain", "Stomach"],
            OptionKey::B,
        ),
        question(
            65,
            Domain::Scientific,
            "Which of the following is NOT a state of matter?",
            ["Solid", "Liquid", "Gas", "Energy"],
            OptionKey::D,
        ),
        question(
            66,
            Domain::Scientific,
            "Plants make their own food through a process called:",
            ["Digestion", "Photosynthesis", "Respiration", "Evaporation"],
            OptionKey::B,
        ),
        question(
            67,
            Domain::Scientific,
            "Which gas do humans need to breathe in to survive?",
            ["Carbon dioxide", "Oxygen", "Nitrogen", "Helium"],
            OptionKey::B,
        ),
        question(
            68,
            Domain::Scientific,
            "Which part of the plant absorbs water and minerals from the soil?",
            ["Leaves", "Roots", "Stem", "Flower"],
            OptionKey::B,
        ),
        question(
            69,
            Domain::Scientific,
            "What force pulls objects towards the center of the Earth?",
            ["Friction", "Electricity", "Gravity", "Magnetism"],
            OptionKey::C,
        ),
        question(
            70,
            Domain::Scientific,
            "Which one is an example of a physical change?",
            ["Burning paper", "Rusting iron", "Melting ice", "Baking a cake"],
            OptionKey::C,
        ),
        question(
            71,
            Domain::Scientific,
            "Which is the closest planet to the Sun?",
            ["Earth", "Venus", "Mercury", "Mars"],
            OptionKey::C,
        ),
        question(
            72,
            Domain::Scientific,
            "What do we call the path of a planet around the Sun?",
            ["Rotation", "Orbit", "Axis", "Cycle"],
            OptionKey::B,
        ),
        question(
            73,
            Domain::Scientific,
            "Which of these is an example of a mixture?",
            ["Pure water", "Oxygen gas", "Salt and water", "Gold bar"],
            OptionKey::C,
        ),
        question(
            74,
            Domain::Scientific,
            "Which part of the cell contains genetic material (DNA)?",
            ["Cell membrane", "Cytoplasm", "Nucleus", "Cell wall"],
            OptionKey::C,
        ),
        question(
            75,
            Domain::Scientific,
            "Which blood vessels carry blood AWAY from the heart?",
            ["Veins", "Capillaries", "Arteries", "Venules"],
            OptionKey::C,
        ),
        question(
            76,
            Domain::Scientific,
            "What is the main gas found in the Earth's atmosphere?",
            ["Oxygen", "Nitrogen", "Carbon dioxide", "Hydrogen"],
            OptionKey::B,
        ),
        question(
            77,
            Domain::Scientific,
            "Which organ system is responsible for exchanging gases with the environment?",
            ["Digestive system", "Circulatory system", "Respiratory system", "Skeletal system"],
            OptionKey::C,
        ),
        question(
            78,
            Domain::Scientific,
            "Which of the following is an example of a chemical change?",
            ["Boiling water", "Freezing water", "Tearing paper", "Burning wood"],
            OptionKey::D,
        ),
        question(
            79,
            Domain::Scientific,
            "What is the main function of the red blood cells?",
            ["Fight infections", "Carry oxygen", "Control body temperature", "Form blood clots"],
            OptionKey::B,
        ),
        question(
            80,
            Domain::Scientific,
            "Which unit is commonly used to measure electrical current?",
            ["Volt", "Ohm", "Ampere", "Watt"],
            OptionKey::C,
        ),
        question(
            81,
            Domain::Scientific,
            "Which layer of the Earth is composed mostly of solid rock and forms the continents?",
            ["Inner core", "Outer core", "Mantle", "Crust"],
            OptionKey::D,
        ),
        question(
            82,
            Domain::Scientific,
            "Which of the following best describes an ECOSYSTEM?",
            [
                "Only plants in a forest",
                "Only animals in a forest",
                "A community of organisms and their environment",
                "Only soil and water in an area",
            ],
            OptionKey::C,
        ),
        question(
            83,
            Domain::Scientific,
            "Which is an example of a non-metal that is essential for life?",
            ["Iron", "Copper", "Oxygen", "Sodium"],
            OptionKey::C,
        ),
        question(
            84,
            Domain::Scientific,
            "Which of the following BEST explains why we see lightning before we hear thunder?",
            [
                "Sound travels faster than light.",
                "Light travels faster than sound.",
                "Lightning is closer than thunder.",
                "Thunder is brighter than lightning.",
            ],
            OptionKey::B,
        ),
        question(
            85,
            Domain::Scientific,
            "Which organ is primarily responsible for filtering waste from the blood?",
            ["Liver", "Kidneys", "Lungs", "Pancreas"],
            OptionKey::B,
        ),
        question(
            86,
            Domain::Scientific,
            "Which of the following shows the CORRECT sequence of the water cycle?",
            [
                "Evaporation → Condensation → Precipitation",
                "Condensation → Evaporation → Precipitation",
                "Precipitation → Condensation → Evaporation",
                "Evaporation → Precipitation → Condensation",
            ],
            OptionKey::A,
        ),
        question(
            87,
            Domain::Scientific,
            "Which type of simple machine is a seesaw?",
            ["Lever", "Pulley", "Inclined plane", "Wheel and axle"],
            OptionKey::A,
        ),
        question(
            88,
            Domain::Scientific,
            "Which of the following BEST describes friction?",
            [
                "A force that pushes objects upward",
                "A force that resists motion between surfaces",
                "A force that pulls objects to the Earth",
                "A force that speeds up moving objects",
            ],
            OptionKey::B,
        ),
        question(
            89,
            Domain::Scientific,
            "Which environmental problem is caused mainly by cutting too many trees?",
            ["Overfishing", "Deforestation", "Air pollution", "Coral bleaching"],
            OptionKey::B,
        ),
        question(
            90,
            Domain::Scientific,
            "Which is the PRIMARY source of energy for almost all ecosystems?",
            ["Wind", "Sun", "Water", "Soil"],
            OptionKey::B,
        ),

        // Abstract reasoning
        question(
            91,
            Domain::Abstract,
            "Which number completes the pattern? 2, 4, 8, 16, __",
            ["18", "24", "30", "32"],
            OptionKey::D,
        ),
        question(
            92,
            Domain::Abstract,
            "Which number completes the pattern? 5, 10, 20, 40, __",
            ["60", "70", "80", "90"],
            OptionKey::C,
        ),
        question(
            93,
            Domain::Abstract,
            "Which number completes the pattern? 9, 7, 5, 3, __",
            ["0", "1", "2", "4"],
            OptionKey::B,
        ),
        question(
            94,
            Domain::Abstract,
            "Which pair continues the pattern? (A, C), (B, D), (C, E), ( __ )",
            ["(D, F)", "(D, G)", "(E, G)", "(E, F)"],
            OptionKey::A,
        ),
        question(
            95,
            Domain::Abstract,
            "Which number does NOT belong in the group? 3, 6, 9, 12, 15, 22",
            ["3", "9", "15", "22"],
            OptionKey::D,
        ),
        question(
            96,
            Domain::Abstract,
            "Which figure would complete a sequence of shapes increasing in sides: triangle, square, pentagon, __?",
            ["Circle", "Hexagon", "Octagon", "Rectangle"],
            OptionKey::B,
        ),
        question(
            97,
            Domain::Abstract,
            "If all Bloops are Lazzies and some Lazzies are Migs, which is TRUE?",
            [
                "All Migs are Bloops.",
                "Some Migs may be Bloops.",
                "No Migs are Bloops.",
                "All Bloops are Migs.",
            ],
            OptionKey::B,
        ),
        question(
            98,
            Domain::Abstract,
            "Find the odd one out: ▲, ■, ●, 7",
            ["▲", "■", "●", "7"],
            OptionKey::D,
        ),
        question(
            99,
            Domain::Abstract,
            "Which number comes next? 1, 4, 9, 16, 25, __",
            ["30", "32", "36", "49"],
            OptionKey::C,
        ),
        question(
            100,
            Domain::Abstract,
            "Which pair is related in the SAME way as HOT : COLD?",
            ["Up : Down", "Chair : Table", "Sun : Light", "Food : Eat"],
            OptionKey::A,
        ),
        question(
            101,
            Domain::Abstract,
            "If A = 1, B = 2, C = 3, what is the value of F?",
            ["4", "5", "6", "7"],
            OptionKey::C,
        ),
        question(
            102,
            Domain::Abstract,
            "Which number comes next in the pattern? 2, 5, 10, 17, __",
            ["24", "26", "28", "30"],
            OptionKey::A,
        ),
        question(
            103,
            Domain::Abstract,
            "Which of the following sets follows the same rule as (2, 4, 8)?",
            ["(3, 6, 9)", "(5, 10, 15)", "(4, 8, 16)", "(6, 12, 18)"],
            OptionKey::C,
        ),
        question(
            104,
            Domain::Abstract,
            "Which number completes the pattern? 11, 14, 17, 20, __",
            ["21", "22", "23", "24"],
            OptionKey::B,
        ),
        question(
            105,
            Domain::Abstract,
            "Which number completes the pattern? 3, 9, 27, __",
            ["54", "72", "81", "90"],
            OptionKey::C,
        ),
        question(
            106,
            Domain::Abstract,
            "Which letter completes the pattern? D, E, F, H, I, J, __",
            ["K", "L", "M", "N"],
            OptionKey::A,
        ),
        question(
            107,
            Domain::Abstract,
            "Which number does NOT belong? 16, 25, 36, 48, 49",
            ["16", "36", "48", "49"],
            OptionKey::C,
        ),
        question(
            108,
            Domain::Abstract,
            "Which pair completes the analogy? STUDENT : SCHOOL = WORKER : __",
            ["House", "Office", "Mall", "Park"],
            OptionKey::B,
        ),
        question(
            109,
            Domain::Abstract,
            "Which pair completes the analogy? HAND : GLOVE = FOOT : __",
            ["Sock", "Shirt", "Hat", "Scarf"],
            OptionKey::A,
        ),
        question(
            110,
            Domain::Abstract,
            "Which of the following has a different relationship? CAT : KITTEN, DOG : PUPPY, COW : CALF, BIRD : NEST",
            ["CAT : KITTEN", "DOG : PUPPY", "COW : CALF", "BIRD : NEST"],
            OptionKey::D,
        ),
        question(
            111,
            Domain::Abstract,
            "Which number completes the pattern? 100, 90, 81, 73, __",
            ["65", "66", "67", "68"],
            OptionKey::C,
        ),
        question(
            112,
            Domain::Abstract,
            "Which of the following is the odd one out? 24, 28, 30, 32, 36",
            ["24", "28", "30", "36"],
            OptionKey::C,
        ),
        question(
            113,
            Domain::Abstract,
            "Which pair completes the analogy? BAKER : BREAD = CARPENTER : __",
            ["Meat", "Clothes", "Furniture", "Books"],
            OptionKey::C,
        ),
        question(
            114,
            Domain::Abstract,
            "Which figure is the odd one out if the others are polygons?",
            ["Triangle", "Circle", "Square", "Pentagon"],
            OptionKey::B,
        ),
        question(
            115,
            Domain::Abstract,
            "Which number completes the pattern? 6, 11, 16, 21, __",
            ["25", "26", "27", "28"],
            OptionKey::B,
        ),
        question(
            116,
            Domain::Abstract,
            "Which pair completes the analogy? TEACHER : CLASSROOM = PILOT : __",
            ["Hospital", "Kitchen", "Airplane", "Farm"],
            OptionKey::C,
        ),
        question(
            117,
            Domain::Abstract,
            "Which of the following words is NOT related to the others? Red, Blue, Green, Circle",
            ["Red", "Blue", "Green", "Circle"],
            OptionKey::D,
        ),
        question(
            118,
            Domain::Abstract,
            "Which number completes the pattern? 2, 3, 5, 8, 12, __",
            ["15", "17", "18", "20"],
            OptionKey::B,
        ),
        question(
            119,
            Domain::Abstract,
            "Which pair completes the analogy? EYE : SEE = EAR : __",
            ["Talk", "Hear", "Smell", "Taste"],
            OptionKey::B,
        ),
        question(
            120,
            Domain::Abstract,
            "Which number does NOT belong in the group? 5, 10, 15, 22, 25",
            ["10", "15", "22", "25"],
            OptionKey::C,
        ),

        // Clerical
        question(
            121,
            Domain::Clerical,
            "Which of the following is correctly alphabetized?",
            [
                "Apple, Ant, Airplane",
                "Ant, Airplane, Apple",
                "Airplane, Apple, Ant",
                "Apple, Airplane, Ant",
            ],
            OptionKey::B,
        ),
        question(
            122,
            Domain::Clerical,
            "Which date comes EARLIEST in the year?",
            ["March 15", "February 10", "April 1", "January 20"],
            OptionKey::D,
        ),
        question(
            123,
            Domain::Clerical,
            "Arrange the words alphabetically: Mango, Apple, Grape, Banana",
            [
                "Apple, Banana, Grape, Mango",
                "Apple, Grape, Banana, Mango",
                "Banana, Apple, Grape, Mango",
                "Grape, Banana, Apple, Mango",
            ],
            OptionKey::A,
        ),
        question(
            124,
            Domain::Clerical,
            "Which time is LATEST in the day?",
            ["8:45 AM", "11:30 AM", "2:15 PM", "10:05 PM"],
            OptionKey::D,
        ),
        question(
            125,
            Domain::Clerical,
            "Which of the following is a correct filing order for numbers?",
            ["101, 11, 99, 120", "11, 99, 101, 120", "99, 11, 101, 120", "120, 101, 99, 11"],
            OptionKey::B,
        ),
        question(
            126,
            Domain::Clerical,
            "Which is the correct way to write the date April 5, 2025 in numeric form? (Month/Day/Year)",
            ["05/04/25", "04/05/25", "25/04/05", "25/05/04"],
            OptionKey::B,
        ),
        question(
            127,
            Domain::Clerical,
            "Which is correctly alphabetized by last name?",
            [
                "Ana Cruz, Ben Abad, Carla Dela Cruz",
                "Ben Abad, Ana Cruz, Carla Dela Cruz",
                "Carla Dela Cruz, Ben Abad, Ana Cruz",
                "Ana Cruz, Carla Dela Cruz, Ben Abad",
            ],
            OptionKey::B,
        ),
        question(
            128,
            Domain::Clerical,
            "Which of the following is in CORRECT ascending order?",
            ["0.75, 0.5, 1.0", "0.5, 0.75, 1.0", "1.0, 0.75, 0.5", "0.75, 1.0, 0.5"],
            OptionKey::B,
        ),
        question(
            129,
            Domain::Clerical,
            "Which list of times is in chronological order?",
            [
                "7:30 AM, 9:00 AM, 8:45 AM",
                "9:00 AM, 8:45 AM, 7:30 AM",
                "7:30 AM, 8:45 AM, 9:00 AM",
                "8:45 AM, 7:30 AM, 9:00 AM",
            ],
            OptionKey::C,
        ),
        question(
            130,
            Domain::Clerical,
            "Choose the correctly spelled word.",
            ["Reciept", "Receipt", "Receit", "Recipt"],
            OptionKey::B,
        ),
        question(
            131,
            Domain::Clerical,
            "Which is the correct order of days?",
            [
                "Monday, Wednesday, Tuesday",
                "Wednesday, Monday, Tuesday",
                "Tuesday, Monday, Wednesday",
                "Monday, Tuesday, Wednesday",
            ],
            OptionKey::D,
        ),
        question(
            132,
            Domain::Clerical,
            "Which time is EARLIEST?",
            ["3:15 PM", "11:45 AM", "1:00 PM", "6:30 PM"],
            OptionKey::B,
        ),
        question(
            133,
            Domain::Clerical,
            "Which set of names is correctly alphabetized?",
            [
                "Carlos, Anna, Brian",
                "Anna, Brian, Carlos",
                "Brian, Anna, Carlos",
                "Carlos, Brian, Anna",
            ],
            OptionKey::B,
        ),
        question(
            134,
            Domain::Clerical,
            "Which number list is arranged from GREATEST to LEAST?",
            ["120, 98, 75, 60", "120, 75, 98, 60", "60, 75, 98, 120", "98, 120, 75, 60"],
            OptionKey::A,
        ),
        question(
            135,
            Domain::Clerical,
            "Which file label should come FIRST in an alphabetical filing system?",
            ["Garcia, Ana", "Garcia, Carlo", "Garcia, Allan", "Garcia, Arman"],
            OptionKey::C,
        ),
        question(
            136,
            Domain::Clerical,
            "If you arrange these months alphabetically, which comes last? March, May, January, June",
            ["March", "May", "January", "June"],
            OptionKey::B,
        ),
        question(
            137,
            Domain::Clerical,
            "Which format CORRECTLY shows a time of ten thirty in the evening?",
            ["10:30 AM", "10:30 PM", "22:30 AM", "22:30 PM"],
            OptionKey::B,
        ),
        question(
            138,
            Domain::Clerical,
            "Which of the following words is spelled correctly?",
            ["Occassion", "Occasion", "Occation", "Ocation"],
            OptionKey::B,
        ),
        question(
            139,
            Domain::Clerical,
            "Arrange the numbers in descending order: 0.6, 0.45, 0.9, 0.75",
            [
                "0.9, 0.75, 0.6, 0.45",
                "0.9, 0.6, 0.75, 0.45",
                "0.75, 0.9, 0.6, 0.45",
                "0.6, 0.75, 0.9, 0.45",
            ],
            OptionKey::A,
        ),
        question(
            140,
            Domain::Clerical,
            "Which of the following dates is in the middle when arranged chronologically?",
            ["June 1, 2024", "May 20, 2024", "July 5, 2024", "April 30, 2024"],
            OptionKey::A,
        ),
        question(
            141,
            Domain::Clerical,
            "Which abbreviation is used for 'department' in office documents?",
            ["dept.", "dpmt.", "deptm.", "dpmnt."],
            OptionKey::A,
        ),
        question(
            142,
            Domain::Clerical,
            "In a list of names, which should appear LAST alphabetically?",
            ["Dela Cruz, Ana", "Dela Cruz, Arvin", "Dela Cruz, Carlo", "Dela Cruz, Angelo"],
            OptionKey::C,
        ),
        question(
            143,
            Domain::Clerical,
            "Which of the following is the correct ascending order of these times? 3:45 PM, 11:15 AM, 1:00 PM",
            [
                "11:15 AM, 1:00 PM, 3:45 PM",
                "1:00 PM, 11:15 AM, 3:45 PM",
                "3:45 PM, 1:00 PM, 11:15 AM",
                "1:00 PM, 3:45 PM, 11:15 AM",
            ],
            OptionKey::A,
        ),
        question(
            144,
            Domain::Clerical,
            "Which number is in the correct position if the sequence is arranged from SMALLEST to LARGEST? 150, 120, 90, 60",
            ["150", "120", "90", "60"],
            OptionKey::D,
        ),
        question(
            145,
            Domain::Clerical,
            "Which of these IS NOT written in correct capital-letter form?",
            ["Quezon City", "manila City", "Cebu Province", "Davao City"],
            OptionKey::B,
        ),
        question(
            146,
            Domain::Clerical,
            "Which of these is the correct alphabetical order? Report, Reply, Repeat, Replace",
            [
                "Repeat, Replace, Reply, Report",
                "Replace, Repeat, Reply, Report",
                "Repeat, Reply, Replace, Report",
                "Reply, Repeat, Replace, Report",
            ],
            OptionKey::D,
        ),
        question(
            147,
            Domain::Clerical,
            "Which is the correct way to write eight thirty in the morning using 24-hour time?",
            ["8:30", "08:30", "20:30", "18:30"],
            OptionKey::B,
        ),
        question(
            148,
            Domain::Clerical,
            "Which of the following is the correct form of the word meaning a list of items or topics?",
            ["Shedule", "Schedulle", "Schedule", "Schedul"],
            OptionKey::C,
        ),
        question(
            149,
            Domain::Clerical,
            "When sorting by last name, which of the following should come FIRST?",
            ["De Leon, Maria", "Dela Cruz, Mario", "Delos Santos, Mark", "De la Paz, Mico"],
            OptionKey::D,
        ),
        question(
            150,
            Domain::Clerical,
            "Which of the following is the correct chronological order of these school events? Recognition Day, Enrollment, Graduation",
            [
                "Enrollment, Recognition Day, Graduation",
                "Recognition Day, Enrollment, Graduation",
                "Graduation, Recognition Day, Enrollment",
                "Enrollment, Graduation, Recognition Day",
            ],
            OptionKey::A,
        ),

        // Entrepreneurial
        question(
            151,
            Domain::Entrepreneurial,
            "A student wants to earn money after class. Which plan shows entrepreneurial thinking?",
            [
                "Playing online games every night",
                "Selling homemade snacks to classmates",
                "Skipping homework to rest",
                "Watching TV series",
            ],
            OptionKey::B,
        ),
        question(
            152,
            Domain::Entrepreneurial,
            "Which is the BEST way to know if a small business idea is profitable?",
            [
                "Copy any popular business",
                "Ask only close friends",
                "Check costs and possible income",
                "Start without planning",
            ],
            OptionKey::C,
        ),
        question(
            153,
            Domain::Entrepreneurial,
            "A student wants to sell school supplies. What should be done FIRST?",
            [
                "Buy many items immediately",
                "Check what classmates need most",
                "Rent a big store",
                "Hire many workers",
            ],
            OptionKey::B,
        ),
        question(
            154,
            Domain::Entrepreneurial,
            "Which of the following shows GOOD customer service?",
            [
                "Ignoring customers",
                "Being rude when tired",
                "Listening carefully to customer needs",
                "Closing early without notice",
            ],
            OptionKey::C,
        ),
        question(
            155,
            Domain::Entrepreneurial,
            "Profit is BEST described as:",
            [
                "The total money received from sales",
                "The money left after expenses are paid",
                "The amount borrowed from friends",
                "The price of all products",
            ],
            OptionKey::B,
        ),
        question(
            156,
            Domain::Entrepreneurial,
            "Which situation shows RISK-TAKING in business?",
            [
                "Trying a new product after research",
                "Never changing anything",
                "Closing the business immediately",
                "Ignoring customer feedback",
            ],
            OptionKey::A,
        ),
        question(
            157,
            Domain::Entrepreneurial,
            "What is a simple way to promote a small online business?",
            [
                "Avoid using social media",
                "Share products on social media platforms",
                "Hide the prices",
                "Sell only to one person",
            ],
            OptionKey::B,
        ),
        question(
            158,
            Domain::Entrepreneurial,
            "Which statement about budgeting is TRUE?",
            [
                "Expenses should always be higher than income.",
                "Budgeting helps control spending.",
                "Budgeting is not important for small businesses.",
                "Income is not part of a budget.",
            ],
            OptionKey::B,
        ),
        question(
            159,
            Domain::Entrepreneurial,
            "A sari-sari store owner notices that chips sell more than candies. What should she do?",
            [
                "Stop selling chips",
                "Buy more chips to sell",
                "Increase candy prices only",
                "Close the store",
            ],
            OptionKey::B,
        ),
        question(
            160,
            Domain::Entrepreneurial,
            "Which quality is important for an entrepreneur?",
            [
                "Being easily discouraged",
                "Being lazy",
                "Being creative and persistent",
                "Ignoring problems",
            ],
            OptionKey::C,
        ),
        question(
            161,
            Domain::Entrepreneurial,
            "A business plan is used to:",
            [
                "Avoid all risks",
                "Guide how the business will be run",
                "Decide school subjects",
                "Stop competition forever",
            ],
            OptionKey::B,
        ),
        question(
            162,
            Domain::Entrepreneurial,
            "Which example shows ethical behavior in business?",
            [
                "Lying about product quality",
                "Selling expired goods",
                "Being honest about product limitations",
                "Hiding important information",
            ],
            OptionKey::C,
        ),
        question(
            163,
            Domain::Entrepreneurial,
            "Why is keeping records of sales and expenses important?",
            [
                "To confuse customers",
                "To know if the business earns or loses money",
                "To hide income from others",
                "To make prices random",
            ],
            OptionKey::B,
        ),
        question(
            164,
            Domain::Entrepreneurial,
            "A student wants to start an online art commission business. What should be her FIRST step?",
            [
                "Buy expensive equipment immediately",
                "Check if there are people willing to pay for her art",
                "Stop practicing drawing",
                "Rent a physical store",
            ],
            OptionKey::B,
        ),
        question(
            165,
            Domain::Entrepreneurial,
            "Which pricing strategy is MOST appropriate for a new product?",
            [
                "Setting a price without checking competitors",
                "Setting a price based on cost and competitor prices",
                "Using random prices every day",
                "Always choosing the highest price",
            ],
            OptionKey::B,
        ),
        question(
            166,
            Domain::Entrepreneurial,
            "Which of the following BEST describes a 'target market'?",
            [
                "All people in the city",
                "The specific group of customers a business focuses on",
                "Only the owner's family and friends",
                "People who do not buy products",
            ],
            OptionKey::B,
        ),
        question(
            167,
            Domain::Entrepreneurial,
            "Which statement BEST describes 'capital' in a small business?",
            [
                "The manager's personal traits",
                "The money or assets used to start the business",
                "The number of customers",
                "The amount of time you spend resting",
            ],
            OptionKey::B,
        ),
        question(
            168,
            Domain::Entrepreneurial,
            "A student entrepreneur sells personalized keychains. Which action shows good inventory management?",
            [
                "Ordering materials only after running out",
                "Keeping a record of how many keychains are sold and remaining",
                "Ignoring the number of unsold keychains",
                "Buying materials without checking sales",
            ],
            OptionKey::B,
        ),
        question(
            169,
            Domain::Entrepreneurial,
            "Which of the following BEST describes 'customer loyalty'?",
            [
                "Customers who complain frequently",
                "Customers who buy once and never return",
                "Customers who repeatedly buy from the same business",
                "Customers who only ask for discounts",
            ],
            OptionKey::C,
        ),
        question(
            170,
            Domain::Entrepreneurial,
            "Which of the following is the BEST way to handle customer complaints?",
            [
                "Ignore the complaint and move on",
                "Listen carefully and try to solve the issue",
                "Blame the customer for the problem",
                "Tell the customer to go away",
            ],
            OptionKey::B,
        ),
        question(
            171,
            Domain::Entrepreneurial,
            "Which type of expense is electricity for a small store?",
            ["Capital", "Fixed or operating expense", "Profit", "Liability"],
            OptionKey::B,
        ),
        question(
            172,
            Domain::Entrepreneurial,
            "A small café owner wants to attract more customers. Which idea is MOST helpful?",
            [
                "Reduce seating space",
                "Improve service and create student discounts",
                "Increase prices without reason",
                "Close earlier than usual",
            ],
            OptionKey::B,
        ),
        question(
            173,
            Domain::Entrepreneurial,
            "Which of the following is an example of an ONLINE marketing strategy?",
            [
                "Posting flyers on walls",
                "Announcing in the school canteen",
                "Creating a Facebook page for the business",
                "Using a megaphone in the street",
            ],
            OptionKey::C,
        ),
        question(
            174,
            Domain::Entrepreneurial,
            "Which of the following is the MAIN goal of an entrepreneur?",
            [
                "To avoid all risks in life",
                "To create and manage a business for profit",
                "To work as an employee forever",
                "To spend all earnings immediately",
            ],
            OptionKey::B,
        ),
        question(
            175,
            Domain::Entrepreneurial,
            "A school club wants to raise funds and decides to sell T-shirts. What is the BEST first step?",
            [
                "Order T-shirts without design",
                "Survey students about designs and sizes they prefer",
                "Print the most expensive design",
                "Sell T-shirts without planning price",
            ],
            OptionKey::B,
        ),
        question(
            176,
            Domain::Entrepreneurial,
            "Which quality helps an entrepreneur recover from failures and try again?",
            ["Impatience", "Resilience", "Laziness", "Dishonesty"],
            OptionKey::B,
        ),
        question(
            177,
            Domain::Entrepreneurial,
            "Which statement about competition in business is TRUE?",
            [
                "Competition is always bad and must be avoided.",
                "Competition can encourage businesses to improve products and services.",
                "Competition means copying everything from others.",
                "Competition has no effect on customers.",
            ],
            OptionKey::B,
        ),
        question(
            178,
            Domain::Entrepreneurial,
            "Why is record-keeping important for small businesses?",
            [
                "To hide mistakes from others",
                "To clearly track income, expenses, and profits",
                "To confuse customers and competitors",
                "To avoid paying employees",
            ],
            OptionKey::B,
        ),
        question(
            179,
            Domain::Entrepreneurial,
            "Which of the following BEST shows social responsibility in business?",
            [
                "Throwing waste anywhere to save time",
                "Using eco-friendly packaging materials",
                "Overworking employees without pay",
                "Selling fake branded items",
            ],
            OptionKey::B,
        ),
        question(
            180,
            Domain::Entrepreneurial,
            "A student entrepreneur earns ₱3,000 from a project and spends ₱2,200 on materials and fees. What is the PROFIT?",
            ["₱800", "₱3,000", "₱2,200", "₱5,200"],
            OptionKey::A,
        ),
    ]
}

fn question(
    id: u32,
    domain: Domain,
    stem: &str,
    labels: [&str; 4],
    correct_option: OptionKey,
) -> Question {
    let options = OptionKey::ordered().map(|key| QuestionOption {
        id: key,
        label: labels[key.index()].to_string(),
    });

    Question {
        id,
        domain,
        stem: stem.to_string(),
        options,
        correct_option,
    }
}
