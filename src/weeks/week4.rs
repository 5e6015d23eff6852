// Week 4: getting around.
use super::SentenceDesc;

pub static WEEK4: &[SentenceDesc] = &[
    SentenceDesc {
        id: 401,
        level: 0,
        korean: "기차역이 어디예요?",
        is_final: false,
        tokens: &[("火车站", "huǒchēzhàn"), ("在", "zài"), ("哪儿", "nǎr")],
    },
    SentenceDesc {
        id: 401,
        level: 1,
        korean: "A: 실례합니다, 기차역이 어디예요?",
        is_final: true,
        tokens: &[
            ("请问", "qǐngwèn"),
            ("火车站", "huǒchēzhàn"),
            ("在", "zài"),
            ("哪儿", "nǎr"),
        ],
    },
    SentenceDesc {
        id: 402,
        level: 0,
        korean: "똑바로 가세요.",
        is_final: false,
        tokens: &[("一直", "yìzhí"), ("往前", "wǎng qián"), ("走", "zǒu")],
    },
    SentenceDesc {
        id: 402,
        level: 1,
        korean: "B: 똑바로 가서 왼쪽으로 도세요.",
        is_final: true,
        tokens: &[
            ("一直", "yìzhí"),
            ("往前", "wǎng qián"),
            ("走", "zǒu"),
            ("然后", "ránhòu"),
            ("往左", "wǎng zuǒ"),
            ("拐", "guǎi"),
        ],
    },
    SentenceDesc {
        id: 403,
        level: 0,
        korean: "표 두 장",
        is_final: false,
        tokens: &[("两张", "liǎng zhāng"), ("票", "piào")],
    },
    SentenceDesc {
        id: 403,
        level: 1,
        korean: "베이징 가는 표 두 장",
        is_final: false,
        tokens: &[
            ("两张", "liǎng zhāng"),
            ("去", "qù"),
            ("北京", "Běijīng"),
            ("的", "de"),
            ("票", "piào"),
        ],
    },
    SentenceDesc {
        id: 403,
        level: 2,
        korean: "A: 베이징 가는 표 두 장 주세요.",
        is_final: true,
        tokens: &[
            ("我", "wǒ"),
            ("要", "yào"),
            ("两张", "liǎng zhāng"),
            ("去", "qù"),
            ("北京", "Běijīng"),
            ("的", "de"),
            ("票", "piào"),
        ],
    },
];
