//! The static topic catalog: five authored lesson modules.
//!
//! Pure data, defined at process start and never mutated. Topic 1 carries
//! ru/uz translation tables; the remaining modules are base-language only.

use std::collections::HashMap;

use crate::model::{
    GapFill, LogicMap, PracticeChamber, QuizQuestion, Topic, TopicId, TopicTranslations,
    TranslatedContent,
};

/// The first option is the correct answer.
fn quiz(question: &str, options: &[&str]) -> QuizQuestion {
    QuizQuestion {
        question: question.to_string(),
        options: options.iter().map(|s| (*s).to_string()).collect(),
        answer: options[0].to_string(),
        explanation: None,
    }
}

fn gap(text_parts: &[&str], answers: &[&str]) -> GapFill {
    GapFill {
        text_parts: text_parts.iter().map(|s| (*s).to_string()).collect(),
        answers: answers.iter().map(|s| (*s).to_string()).collect(),
    }
}

fn media_translations() -> TopicTranslations {
    let mut ru_lines = HashMap::new();
    ru_lines.insert(
        "Stop writing.".to_string(),
        "Хватит писать.".to_string(),
    );
    ru_lines.insert(
        "Start thinking.".to_string(),
        "Начните думать.".to_string(),
    );
    ru_lines.insert(
        "Find the specific question.".to_string(),
        "Найдите конкретный вопрос.".to_string(),
    );

    let mut uz_lines = HashMap::new();
    uz_lines.insert(
        "Stop writing.".to_string(),
        "Yozishni to'xtating.".to_string(),
    );
    uz_lines.insert(
        "Start thinking.".to_string(),
        "O'ylashni boshlang.".to_string(),
    );

    TopicTranslations {
        ru: TranslatedContent {
            title: Some("Медиа и цензура".to_string()),
            specific_question: Some(
                "Скрывать насилие, чтобы остановить страх? ИЛИ показывать, чтобы защитить нас?"
                    .to_string(),
            ),
            trap: Some(
                "Писать в общих словах о «фейковых новостях» или «коррупции».".to_string(),
            ),
            logic_map: Some(LogicMap {
                view_a: "Слишком много деталей = паника → подражатели копируют увиденное."
                    .to_string(),
                view_b: "Осведомлённость = подготовка → зная об опасности, мы можем её избежать."
                    .to_string(),
                position: "Прозрачность необходима, но кровавые детали излишни.".to_string(),
            }),
            lines: ru_lines,
            ..TranslatedContent::default()
        },
        uz: TranslatedContent {
            title: Some("Media va tsenzura".to_string()),
            trap: Some(
                "«Soxta yangiliklar» yoki «korruptsiya» haqida umumiy yozish.".to_string(),
            ),
            lines: uz_lines,
            ..TranslatedContent::default()
        },
    }
}

/// The five authored topics, in unlock order.
#[must_use]
pub fn static_topics() -> Vec<Topic> {
    vec![
        Topic {
            id: TopicId::new(1),
            year: "2025 High Probability".to_string(),
            title: "Media & Censorship".to_string(),
            prompt: "Some people believe that news coverage of violent crimes should be \
                     restricted to prevent public fear and copycat behavior. Others argue that \
                     full reporting is necessary for public safety. Discuss both views and give \
                     your own opinion."
                .to_string(),
            specific_question: "Hide violence to stop fear? OR Show violence to keep us safe?"
                .to_string(),
            trap: "Writing generally about 'Fake News' or 'Corruption'.".to_string(),
            logic_map: LogicMap {
                view_a: "Too much detail = Panic → 'Copycat' criminals imitate what they see."
                    .to_string(),
                view_b: "Awareness = Preparation → If we know the danger, we can avoid it."
                    .to_string(),
                position: "Transparency is vital, but graphic/bloody details are unnecessary."
                    .to_string(),
            },
            introduction: "It is often argued that media outlets should limit the details of \
                           violent crimes to avoid **inciting** unnecessary panic or encouraging \
                           potential criminals. However, others insist that **transparent** \
                           reporting is essential for maintaining community safety. While I \
                           accept that **sensationalizing** violence is harmful, I believe that \
                           the public has a right to be informed about potential threats in \
                           their **vicinity**."
                .to_string(),
            practice: Some(PracticeChamber {
                logic: quiz(
                    "What is the specific function of the phrase \"While I accept that...\" in \
                     the Thesis Statement?",
                    &[
                        "It introduces a concession, acknowledging the opposing view before \
                         stating the writer's main opinion.",
                        "It states the main argument.",
                        "It gives a specific example.",
                    ],
                ),
                trap: quiz(
                    "Which argument below would be OFF-TOPIC for this specific prompt?",
                    &[
                        "The media often spreads fake news for political reasons.",
                        "Copycat behavior is a real psychological risk.",
                        "Detailed reporting helps people prepare.",
                    ],
                ),
                vocab: quiz(
                    "Match the word \"Vicinity\" to its definition.",
                    &[
                        "The area near or surrounding a particular place.",
                        "A dangerous situation.",
                        "A type of transparent material.",
                    ],
                ),
                gap: gap(
                    &[
                        "It is argued that media should limit details to avoid ",
                        " panic. However, others insist that ",
                        " reporting is essential. While I accept that ",
                        " violence is harmful, the public must know about threats in their ",
                        ".",
                    ],
                    &["Inciting", "Transparent", "Sensationalizing", "Vicinity"],
                ),
            }),
            translations: Some(media_translations()),
        },
        Topic {
            id: TopicId::new(2),
            year: "Economic Focus".to_string(),
            title: "Business & Ethics".to_string(),
            prompt: "Large companies should pay CEOs and executives much higher salaries than \
                     other workers. To what extent do you agree or disagree?"
                .to_string(),
            specific_question: "Is the massive pay gap justified by the market?".to_string(),
            trap: "An emotional rant about 'fairness' without business logic.".to_string(),
            logic_map: LogicMap {
                view_a: "High Risk/Stress → One bad decision destroys the company → Talent war."
                    .to_string(),
                view_b: "Demotivates staff → Creates social inequality → Success is a team \
                         effort."
                    .to_string(),
                position: "Higher pay is okay, but the current gap is excessive.".to_string(),
            },
            introduction: "In the corporate world, it is common practice for senior executives \
                           to receive **remuneration** packages that are vastly superior to \
                           those of the average employee. While I agree that the immense \
                           responsibility of these roles **warrants** higher pay, I disagree \
                           that the current **disparity** found in many large corporations is \
                           ethically or economically **justifiable**."
                .to_string(),
            practice: Some(PracticeChamber {
                logic: quiz(
                    "Does the writer agree or disagree with high salaries?",
                    &[
                        "A balanced view (Yes to higher pay, No to huge gap).",
                        "Completely agrees with high salaries.",
                        "Completely disagrees with high salaries.",
                    ],
                ),
                trap: quiz(
                    "Why is writing \"CEOs are greedy and evil\" a Band 6.0 mistake?",
                    &[
                        "It is emotional and generalized.",
                        "It is too specific.",
                        "It uses incorrect grammar.",
                    ],
                ),
                vocab: quiz(
                    "Match the word \"Remuneration\" to its definition.",
                    &[
                        "Money paid for work or a service (formal).",
                        "A feeling of respect.",
                        "The act of firing someone.",
                    ],
                ),
                gap: gap(
                    &[
                        "Executives receive ",
                        " packages superior to others. While responsibility ",
                        " higher pay, the current ",
                        " is not economically ",
                        ".",
                    ],
                    &["Remuneration", "Warrants", "Disparity", "Justifiable"],
                ),
            }),
            translations: None,
        },
        Topic {
            id: TopicId::new(3),
            year: "Urbanization".to_string(),
            title: "Environment vs Housing".to_string(),
            prompt: "In many countries, there is a shortage of housing in cities. Some people \
                     argue that new towns should be built in the countryside to solve this. Do \
                     the advantages of this outweigh the disadvantages?"
                .to_string(),
            specific_question: "Is building in the country a net positive solution for the \
                                housing crisis?"
                .to_string(),
            trap: "Focusing only on 'Saving Trees' and forgetting 'Housing'.".to_string(),
            logic_map: LogicMap {
                view_a: "Immediate relief for overcrowding → Cheaper land costs.".to_string(),
                view_b: "Irreversible habitat destruction → Loss of food/farm land → Increased \
                         commute/traffic."
                    .to_string(),
                position: "Environmental cost is too high; build up (skyscrapers) instead."
                    .to_string(),
            },
            introduction: "To address the **chronic** lack of accommodation in urban centers, \
                           it has been suggested that governments should construct new \
                           residential areas in rural zones. In my view, although this \
                           **strategy** offers immediate relief for city overcrowding, the \
                           long-term environmental **degradation** and loss of agricultural \
                           land mean that the disadvantages are far more **significant**."
                .to_string(),
            practice: Some(PracticeChamber {
                logic: quiz(
                    "What is the writer's \"Thesis Statement\" doing here?",
                    &[
                        "It clearly outweighs the advantages.",
                        "It says advantages and disadvantages are equal.",
                        "It does not give an opinion.",
                    ],
                ),
                trap: quiz(
                    "True or False: You should spend a paragraph describing different types of \
                     pollution (air, water, noise).",
                    &[
                        "False. Focus on housing logic.",
                        "True. Environmental essays need pollution lists.",
                    ],
                ),
                vocab: quiz(
                    "Match the word \"Chronic\" to its definition.",
                    &[
                        "(Of a problem) persisting for a long time or constantly recurring.",
                        "A severe illness.",
                        "Something temporary.",
                    ],
                ),
                gap: gap(
                    &[
                        "To address the ",
                        " lack of accommodation, a new ",
                        " is suggested. Although it offers relief, the environmental ",
                        " means disadvantages are ",
                        ".",
                    ],
                    &["Chronic", "Strategy", "Degradation", "Significant"],
                ),
            }),
            translations: None,
        },
        Topic {
            id: TopicId::new(4),
            year: "Modern Tech".to_string(),
            title: "Technology & Art".to_string(),
            prompt: "With the rise of artificial intelligence, computers are now creating art, \
                     music, and literature. Some people think this is a negative development. \
                     To what extent do you agree or disagree?"
                .to_string(),
            specific_question: "Is AI in creative fields bad?".to_string(),
            trap: "Talking about robots in factories. Stick to ART.".to_string(),
            logic_map: LogicMap {
                view_a: "Art requires a soul/emotion → AI only mimics patterns → Devalues human \
                         skill."
                    .to_string(),
                view_b: "It is a tool to help non-artists create.".to_string(),
                position: "It is negative. It threatens livelihoods and lacks authenticity."
                    .to_string(),
            },
            introduction: "The **capability** of artificial intelligence to generate complex \
                           works of art, music, and writing has sparked intense debate \
                           regarding the value of human creativity. I strongly agree that this \
                           is a negative development, as it not only **undermines** the \
                           **livelihoods** of professional artists but also floods the market \
                           with content **devoid** of genuine human emotion."
                .to_string(),
            practice: Some(PracticeChamber {
                logic: quiz(
                    "How many main ideas does the Thesis Statement promise to discuss?",
                    &[
                        "Two: Economic impact & Artistic quality.",
                        "One: Technology is bad.",
                        "Three: Jobs, Money, and Computers.",
                    ],
                ),
                trap: quiz(
                    "Which example is best to use in Body Paragraph 1?",
                    &[
                        "Graphic designers losing jobs to tools like Midjourney.",
                        "Robots building cars in factories.",
                        "AI controlling nuclear weapons.",
                    ],
                ),
                vocab: quiz(
                    "Match the word \"Devoid\" to its definition.",
                    &[
                        "Entirely lacking or free from.",
                        "Full of something.",
                        "To destroy completely.",
                    ],
                ),
                gap: gap(
                    &[
                        "The ",
                        " of AI to create art is debated. This ",
                        " the ",
                        " of artists and creates content ",
                        " of emotion.",
                    ],
                    &["Capability", "Undermines", "Livelihoods", "Devoid"],
                ),
            }),
            translations: None,
        },
        Topic {
            id: TopicId::new(5),
            year: "Global Issues".to_string(),
            title: "Space Debris".to_string(),
            prompt: "The increasing frequency of satellite launches and space missions is \
                     leading to a buildup of dangerous debris in orbit. Who should be \
                     responsible for clearing this waste: the companies that launched them, or \
                     international governments?"
                .to_string(),
            specific_question: "WHO cleans the trash? Company vs Government.".to_string(),
            trap: "Discussing 'Is space travel good?'. Focus on LIABILITY.".to_string(),
            logic_map: LogicMap {
                view_a: "'Polluter pays' principle → They make the profit, they pay the cost."
                    .to_string(),
                view_b: "Space is shared territory → Governments must enforce the laws."
                    .to_string(),
                position: "Governments make the rules; Companies pay the bill.".to_string(),
            },
            introduction: "As commercial and state-sponsored space missions multiply, the \
                           **accumulation** of space debris has become a critical hazard. The \
                           question of **liability** for removing this waste is complex. I \
                           believe that while governments must establish the regulatory \
                           **framework**, the financial and physical responsibility for cleanup \
                           should **ultimately** fall upon the organizations and corporations \
                           profiting from these launches."
                .to_string(),
            practice: Some(PracticeChamber {
                logic: quiz(
                    "Who does the writer identify as the primary actors?",
                    &[
                        "Governments (Rules) & Corporations (Money).",
                        "Only Governments.",
                        "Only Corporations.",
                    ],
                ),
                trap: quiz(
                    "Which sentence should you DELETE from your plan?",
                    &[
                        "Space exploration is a waste of money that should be spent on Earth.",
                        "Companies should pay because they profit.",
                        "Governments control the laws.",
                    ],
                ),
                vocab: quiz(
                    "Match the word \"Liability\" to its definition.",
                    &[
                        "The state of being responsible by law.",
                        "The ability to lie.",
                        "A heavy weight.",
                    ],
                ),
                gap: gap(
                    &[
                        "The ",
                        " of debris is a hazard. The question of ",
                        " is complex. While governments create the ",
                        ", the cost should ",
                        " fall on corporations.",
                    ],
                    &["Accumulation", "Liability", "Framework", "Ultimately"],
                ),
            }),
            translations: None,
        },
    ]
}
