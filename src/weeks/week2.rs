// Week 2: daily routine.
use super::SentenceDesc;

pub static WEEK2: &[SentenceDesc] = &[
    SentenceDesc {
        id: 201,
        level: 0,
        korean: "지금 몇 시예요?",
        is_final: false,
        tokens: &[("现在", "xiànzài"), ("几点", "jǐ diǎn")],
    },
    SentenceDesc {
        id: 201,
        level: 1,
        korean: "A: 지금 몇 시예요? 수업이 곧 시작해요.",
        is_final: true,
        tokens: &[
            ("现在", "xiànzài"),
            ("几点", "jǐ diǎn"),
            ("课", "kè"),
            ("快", "kuài"),
            ("开始了", "kāishǐ le"),
        ],
    },
    SentenceDesc {
        id: 202,
        level: 0,
        korean: "저는 매일 아침",
        is_final: false,
        tokens: &[("我", "wǒ"), ("每天", "měitiān"), ("早上", "zǎoshang")],
    },
    SentenceDesc {
        id: 202,
        level: 1,
        korean: "저는 매일 아침 커피를 마셔요.",
        is_final: false,
        tokens: &[
            ("我", "wǒ"),
            ("每天", "měitiān"),
            ("早上", "zǎoshang"),
            ("喝", "hē"),
            ("咖啡", "kāfēi"),
        ],
    },
    SentenceDesc {
        id: 202,
        level: 2,
        korean: "B: 저는 매일 아침 커피를 한 잔 마셔요.",
        is_final: true,
        tokens: &[
            ("我", "wǒ"),
            ("每天", "měitiān"),
            ("早上", "zǎoshang"),
            ("喝", "hē"),
            ("一杯", "yì bēi"),
            ("咖啡", "kāfēi"),
        ],
    },
    SentenceDesc {
        id: 203,
        level: 0,
        korean: "뭐 해요?",
        is_final: false,
        tokens: &[("你", "nǐ"), ("做", "zuò"), ("什么", "shénme")],
    },
    SentenceDesc {
        id: 203,
        level: 1,
        korean: "A: 주말에 뭐 해요?",
        is_final: true,
        tokens: &[("周末", "zhōumò"), ("你", "nǐ"), ("做", "zuò"), ("什么", "shénme")],
    },
];
