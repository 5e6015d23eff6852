// Week 3: shopping and eating out.
use super::SentenceDesc;

pub static WEEK3: &[SentenceDesc] = &[
    SentenceDesc {
        id: 301,
        level: 0,
        korean: "이거 얼마예요?",
        is_final: false,
        tokens: &[("这个", "zhège"), ("多少钱", "duōshao qián")],
    },
    SentenceDesc {
        id: 301,
        level: 1,
        korean: "A: 이거 얼마예요? 너무 비싸요.",
        is_final: true,
        tokens: &[
            ("这个", "zhège"),
            ("多少钱", "duōshao qián"),
            ("太", "tài"),
            ("贵了", "guì le"),
        ],
    },
    SentenceDesc {
        id: 302,
        level: 0,
        korean: "물 한 병",
        is_final: false,
        tokens: &[("一瓶", "yì píng"), ("水", "shuǐ")],
    },
    SentenceDesc {
        id: 302,
        level: 1,
        korean: "물 한 병 주세요.",
        is_final: false,
        tokens: &[("请", "qǐng"), ("给我", "gěi wǒ"), ("一瓶", "yì píng"), ("水", "shuǐ")],
    },
    SentenceDesc {
        id: 302,
        level: 2,
        korean: "B: 여기요, 물 한 병 주세요.",
        is_final: true,
        tokens: &[
            ("服务员", "fúwùyuán"),
            ("请", "qǐng"),
            ("给我", "gěi wǒ"),
            ("一瓶", "yì píng"),
            ("水", "shuǐ"),
        ],
    },
    SentenceDesc {
        id: 303,
        level: 0,
        korean: "맛있어요.",
        is_final: false,
        tokens: &[("很", "hěn"), ("好吃", "hǎochī")],
    },
    SentenceDesc {
        id: 303,
        level: 1,
        korean: "A: 이 음식 정말 맛있어요.",
        is_final: true,
        tokens: &[("这个", "zhège"), ("菜", "cài"), ("真", "zhēn"), ("好吃", "hǎochī")],
    },
];
