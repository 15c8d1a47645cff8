use async_trait::async_trait;

/// A single application operation with typed input, output and error.
#[async_trait]
pub trait UseCase<In, Out, Err>: Send + Sync
where
    In: Send + 'static,
    Out: Send + 'static,
    Err: Send + 'static,
{
    async fn execute(&self, input: In) -> Result<Out, Err>;
}

/// Use case that checks its input before running. Callers outside tests go
/// through `validate_and_execute`.
#[async_trait]
pub trait UseCaseValidatable<In, Out, Err>: UseCase<In, Out, Err> + Send + Sync
where
    // the input is borrowed across the validation await
    In: Send + Sync + 'static,
    Out: Send + 'static,
    Err: Send + 'static,
{
    async fn validate(&self, input: &In) -> Result<(), Err>;

    async fn validate_and_execute(&self, input: In) -> Result<Out, Err> {
        self.validate(&input).await?;
        self.execute(input).await
    }
}
