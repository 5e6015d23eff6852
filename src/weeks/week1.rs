// Week 1: greetings and introductions.
use super::SentenceDesc;

pub static WEEK1: &[SentenceDesc] = &[
    SentenceDesc {
        id: 101,
        level: 0,
        korean: "안녕하세요",
        is_final: false,
        tokens: &[("你", "nǐ"), ("好", "hǎo")],
    },
    SentenceDesc {
        id: 101,
        level: 1,
        korean: "A: 안녕하세요, 만나서 반가워요.",
        is_final: true,
        tokens: &[("你好", "nǐ hǎo"), ("很高兴", "hěn gāoxìng"), ("认识", "rènshi"), ("你", "nǐ")],
    },
    SentenceDesc {
        id: 102,
        level: 0,
        korean: "이름이 뭐예요?",
        is_final: false,
        tokens: &[("你", "nǐ"), ("叫", "jiào"), ("什么", "shénme"), ("名字", "míngzi")],
    },
    SentenceDesc {
        id: 102,
        level: 1,
        korean: "제 이름은 민수예요.",
        is_final: false,
        tokens: &[("我", "wǒ"), ("叫", "jiào"), ("民秀", "Mínxiù")],
    },
    SentenceDesc {
        id: 102,
        level: 2,
        korean: "B: 제 이름은 민수예요. 당신은요?",
        is_final: true,
        tokens: &[("我", "wǒ"), ("叫", "jiào"), ("民秀", "Mínxiù"), ("你呢", "nǐ ne")],
    },
    SentenceDesc {
        id: 103,
        level: 0,
        korean: "저는 한국 사람이에요.",
        is_final: false,
        tokens: &[("我", "wǒ"), ("是", "shì"), ("韩国人", "Hánguó rén")],
    },
    SentenceDesc {
        id: 103,
        level: 1,
        korean: "A: 저는 한국 사람이고, 학생이에요.",
        is_final: true,
        tokens: &[
            ("我", "wǒ"),
            ("是", "shì"),
            ("韩国人", "Hánguó rén"),
            ("也", "yě"),
            ("是", "shì"),
            ("学生", "xuésheng"),
        ],
    },
];
