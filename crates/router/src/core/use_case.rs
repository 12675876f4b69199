pub trait UseCase<In, Out, Err>: Send + Sync {
    fn execute(&self, input: In) -> Result<Out, Err>;
}

pub trait UseCaseValidatable<In, Out, Err>: UseCase<In, Out, Err> {
    fn validate(&self, input: &In) -> Result<(), Err>;

    fn validate_and_execute(&self, input: In) -> Result<Out, Err> {
        self.validate(&input)?;
        self.execute(input)
    }
}
