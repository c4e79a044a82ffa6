//! Sample catalog served in offline mode.

use aware_core::model::{
    Assessment, AssessmentId, AssessmentResult, ModuleId, Question, QuestionId, QuestionKind,
    TrainingModule,
};

use super::InMemoryTrainingApi;

struct DemoModule {
    id: &'static str,
    title: &'static str,
    description: &'static str,
    duration: &'static str,
    video_url: &'static str,
    content: &'static str,
    questions: &'static [(&'static str, QuestionKind, &'static [&'static str])],
}

const TRUE_FALSE: &[&str] = &["True", "False"];

const DEMO_MODULES: &[DemoModule] = &[
    DemoModule {
        id: "module-1",
        title: "How Social Engineering Works",
        description: "Why attackers target people before systems, and the levers they pull.",
        duration: "45 mins",
        video_url: "https://www.youtube.com/embed/cuh5oKVyG4w",
        content: "## What is social engineering?\n\n\
Social engineering is manipulation aimed at getting someone to **reveal information** \
or **take an action** that weakens security.\n\n\
### Common levers\n\n\
- Authority: posing as a manager or IT\n\
- Urgency: deadlines that leave no time to think\n\
- Familiarity: name-dropping colleagues\n\n\
> Pause, verify through a known channel, then act.\n",
        questions: &[
            (
                "What is social engineering primarily based on?",
                QuestionKind::Mcq,
                &[
                    "Exploiting software bugs",
                    "Manipulating human behavior",
                    "Cracking passwords offline",
                    "Intercepting Wi-Fi traffic",
                ],
            ),
            (
                "Attackers often create urgency to bypass careful thinking.",
                QuestionKind::TrueFalse,
                TRUE_FALSE,
            ),
            (
                "What should you do with an unusual request from a supposed authority figure?",
                QuestionKind::Mcq,
                &[
                    "Comply immediately",
                    "Ignore it entirely",
                    "Verify it through a separate, known channel",
                    "Forward it to everyone in your team",
                ],
            ),
        ],
    },
    DemoModule {
        id: "module-2",
        title: "Phishing and Spear Phishing",
        description: "Spotting deceptive email, messages and links.",
        duration: "40 mins",
        video_url: "https://www.youtube.com/embed/PWVN3Rq4gzw",
        content: "## Reading an email critically\n\n\
| Signal | What to check |\n\
| --- | --- |\n\
| Sender | Does the domain match the organisation? |\n\
| Links | Hover first and read the real destination |\n\
| Tone | Pressure, threats or unusual rewards |\n\n\
Spear phishing is **targeted**: it uses details about you to look legitimate.\n",
        questions: &[
            (
                "What distinguishes spear phishing from ordinary phishing?",
                QuestionKind::Mcq,
                &[
                    "It only uses text messages",
                    "It is aimed at a specific person or group",
                    "It never contains links",
                    "It is always sent at night",
                ],
            ),
            (
                "Hovering over a link can reveal where it actually leads.",
                QuestionKind::TrueFalse,
                TRUE_FALSE,
            ),
            (
                "Suspicious emails should be reported even when you are unsure.",
                QuestionKind::TrueFalse,
                TRUE_FALSE,
            ),
        ],
    },
    DemoModule {
        id: "module-3",
        title: "Vishing and Tailgating",
        description: "Phone-based pretexts and physical access attacks.",
        duration: "35 mins",
        video_url: "https://www.youtube.com/embed/lc7scxvKQOo",
        content: "## Voice and physical threats\n\n\
1. **Vishing** uses phone calls to extract credentials or payments.\n\
2. **Tailgating** means following an authorised person through a secure door.\n\n\
IT staff will never ask for your password over the phone.\n",
        questions: &[
            (
                "What is vishing?",
                QuestionKind::Mcq,
                &[
                    "Phishing carried out over voice calls",
                    "A type of malware",
                    "A secure video conference",
                    "A firewall setting",
                ],
            ),
            (
                "Someone calls claiming to be from IT and asks for your password. What do you do?",
                QuestionKind::Mcq,
                &[
                    "Share it if they know your name",
                    "Refuse and report the call",
                    "Give a hint instead",
                    "Change it afterwards and share the new one",
                ],
            ),
            (
                "Challenging unfamiliar people in restricted areas is appropriate.",
                QuestionKind::TrueFalse,
                TRUE_FALSE,
            ),
        ],
    },
    DemoModule {
        id: "module-4",
        title: "Data Protection and Reporting",
        description: "Handling sensitive data and raising the alarm quickly.",
        duration: "30 mins",
        video_url: "",
        content: "## Protecting data\n\n\
- Apply **least privilege**: only the access you need\n\
- Lock your screen when you step away\n\n\
---\n\n\
## Reporting\n\n\
Report incidents *immediately*. Early reports limit damage.\n",
        questions: &[
            (
                "What does the least privilege principle mean?",
                QuestionKind::Mcq,
                &[
                    "Everyone gets administrator rights",
                    "Users get only the access their work requires",
                    "Passwords never expire",
                    "Only managers may use email",
                ],
            ),
            (
                "Delaying a report until you are certain is the safest option.",
                QuestionKind::TrueFalse,
                TRUE_FALSE,
            ),
        ],
    },
];

impl InMemoryTrainingApi {
    /// A four-module catalog with assessments whose submissions always pass.
    #[must_use]
    pub fn demo() -> Self {
        let mut api = Self::new();
        for (index, demo) in DEMO_MODULES.iter().enumerate() {
            let module_id = ModuleId::new(demo.id);
            let order = u32::try_from(index + 1).unwrap_or(u32::MAX);
            let questions: Vec<Question> = demo
                .questions
                .iter()
                .enumerate()
                .map(|(number, (prompt, kind, options))| Question {
                    id: QuestionId::new(format!("{}-q{}", demo.id, number + 1)),
                    prompt: (*prompt).to_owned(),
                    kind: *kind,
                    options: options.iter().map(|option| (*option).to_owned()).collect(),
                })
                .collect();
            let total = u32::try_from(questions.len()).unwrap_or(u32::MAX);

            api.set_result(
                module_id.clone(),
                AssessmentResult {
                    score: total,
                    total,
                    percentage: 100.0,
                    passed: true,
                },
            );
            api = api
                .with_module(TrainingModule {
                    id: module_id.clone(),
                    order,
                    title: demo.title.to_owned(),
                    description: demo.description.to_owned(),
                    duration: demo.duration.to_owned(),
                    video_url: demo.video_url.to_owned(),
                    content: demo.content.to_owned(),
                })
                .with_assessment(Assessment {
                    id: AssessmentId::new(format!("assessment-{order}")),
                    module_id,
                    questions,
                });
        }
        api
    }
}
