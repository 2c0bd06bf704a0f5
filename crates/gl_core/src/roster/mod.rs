// 로스터 데이터 모델
// 선수 스탯, 강화 등급, 라인업

pub mod player;
pub mod rank;

pub use player::*;
pub use rank::*;
