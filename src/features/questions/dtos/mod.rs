mod question_dto;

pub use question_dto::{
    CreateQuestionDto, QuestionCreatedDto, QuestionDeletedDto, QuestionDetailDto,
    QuestionListDto, QuestionPageDto, QuestionResponseDto, SearchQuestionsDto,
};
