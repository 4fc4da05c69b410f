//! # 무작위 닉네임 생성기
//!
//! 닉네임을 지정하지 않은 회원가입과 프로필에 닉네임이 없는 소셜
//! 로그인에서 사람이 읽을 수 있는 한글 닉네임을 생성합니다.
//! 유니크 보장은 호출자(UserService)가 저장소 조회와 유니크 제약으로
//! 처리합니다.

use rand::Rng;

const ADJECTIVES: &[&str] = &[
    "힘찬",
    "날쌘",
    "여유로운",
    "반짝이는",
    "용감한",
    "신나는",
    "느긋한",
    "성실한",
    "재빠른",
    "푸른",
    "잠수하는",
    "헤엄치는",
];

const ANIMALS: &[&str] = &[
    "돌고래",
    "물개",
    "수달",
    "거북이",
    "해마",
    "가오리",
    "펭귄",
    "고래",
    "상어",
    "개구리",
    "오리",
    "잉어",
];

/// `형용사 동물` 형태의 무작위 닉네임을 생성합니다.
pub fn random_nickname() -> String {
    let mut rng = rand::thread_rng();
    let adjective = ADJECTIVES[rng.gen_range(0..ADJECTIVES.len())];
    let animal = ANIMALS[rng.gen_range(0..ANIMALS.len())];

    format!("{} {}", adjective, animal)
}

/// 충돌 시 폴백으로 사용하는 4자리 숫자 꼬리를 붙입니다.
pub fn with_numeric_tail(base: &str) -> String {
    let mut rng = rand::thread_rng();
    format!("{}{:04}", base, rng.gen_range(0..10000))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_random_nickname_uses_word_lists() {
        let nickname = random_nickname();
        let mut parts = nickname.splitn(2, ' ');
        let adjective = parts.next().unwrap();
        let animal = parts.next().unwrap();

        assert!(ADJECTIVES.contains(&adjective));
        assert!(ANIMALS.contains(&animal));
    }

    #[test]
    fn test_numeric_tail_appends_four_digits() {
        let tailed = with_numeric_tail("푸른 수달");
        let tail = &tailed[tailed.len() - 4..];

        assert!(tailed.starts_with("푸른 수달"));
        assert_eq!(tail.chars().count(), 4);
        assert!(tail.chars().all(|c| c.is_ascii_digit()));
    }
}
