use crate::breeds::BreedTable;
use crate::console_logf;
use crate::error::{AppError, AppResult};
use crate::models::{BreedRecord, ImageResult};
use std::future::Future;

/// Fetches images until one belongs to a breed in `table`, giving up after
/// `max_attempts`. Lookup misses and network failures are retried; anything
/// else ends the shuffle straight away.
pub async fn find_breed<'t, F, Fut>(
    table: &'t BreedTable,
    max_attempts: u32,
    mut fetch: F,
) -> AppResult<(ImageResult, &'t BreedRecord)>
where
    F: FnMut() -> Fut,
    Fut: Future<Output = AppResult<ImageResult>>,
{
    let max_attempts = max_attempts.max(1);
    let mut last_err = None;
    for attempt in 1..=max_attempts {
        let found = match fetch().await {
            Ok(image) => table.lookup(&image.breed_id).map(|record| (image, record)),
            Err(e) => Err(e),
        };
        match found {
            Ok((image, record)) => {
                console_logf!(
                    "URL breed: {} and dataset breed: {}",
                    image.breed_id,
                    record.breed
                );
                return Ok((image, record));
            }
            Err(e) if e.is_retryable() => {
                console_logf!("Attempt {}/{} failed: {}", attempt, max_attempts, e);
                last_err = Some(e);
            }
            Err(e) => return Err(e),
        }
    }
    Err(last_err.unwrap_or_else(|| AppError::network("no attempts made")))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::breeds::breed_table;
    use futures::executor::block_on;
    use futures::future::{ready, Ready};
    use std::cell::RefCell;

    fn image(breed_id: &str) -> AppResult<ImageResult> {
        Ok(ImageResult {
            url: format!("https://images.dog.ceo/breeds/{}/1.jpg", breed_id),
            breed_id: breed_id.to_owned(),
        })
    }

    // Hands out the scripted results in order and counts the calls.
    fn scripted(
        results: Vec<AppResult<ImageResult>>,
        calls: &RefCell<usize>,
    ) -> impl FnMut() -> Ready<AppResult<ImageResult>> + '_ {
        let results = RefCell::new(results.into_iter());
        move || {
            *calls.borrow_mut() += 1;
            ready(
                results
                    .borrow_mut()
                    .next()
                    .unwrap_or_else(|| Err(AppError::network("script exhausted"))),
            )
        }
    }

    #[test]
    fn first_known_breed_wins() {
        let calls = RefCell::new(0);
        let fetch = scripted(vec![image("retriever-golden")], &calls);
        let (image, record) = block_on(find_breed(breed_table().unwrap(), 5, fetch)).unwrap();
        assert_eq!(image.breed_id, "retriever-golden");
        assert_eq!(record.breed, "Golden Retriever");
        assert_eq!(*calls.borrow(), 1);
    }

    #[test]
    fn unknown_breeds_and_network_errors_are_retried() {
        let calls = RefCell::new(0);
        let fetch = scripted(
            vec![
                image("appenzeller"),
                Err(AppError::network("timed out")),
                image("beagle"),
            ],
            &calls,
        );
        let (_, record) = block_on(find_breed(breed_table().unwrap(), 5, fetch)).unwrap();
        assert_eq!(record.breed, "Beagle");
        assert_eq!(*calls.borrow(), 3);
    }

    #[test]
    fn gives_up_with_the_last_error() {
        let calls = RefCell::new(0);
        let fetch = scripted(
            vec![image("appenzeller"), image("cavapoo"), image("beagle")],
            &calls,
        );
        match block_on(find_breed(breed_table().unwrap(), 2, fetch)) {
            Err(AppError::Lookup { identifier }) => assert_eq!(identifier, "cavapoo"),
            other => panic!("expected lookup error, got {:?}", other),
        }
        assert_eq!(*calls.borrow(), 2);
    }

    #[test]
    fn status_errors_are_not_retried() {
        let calls = RefCell::new(0);
        let fetch = scripted(
            vec![
                Err(AppError::NotFound {
                    status: 503,
                    url: String::new(),
                }),
                image("beagle"),
            ],
            &calls,
        );
        let result = block_on(find_breed(breed_table().unwrap(), 5, fetch));
        assert!(matches!(result, Err(AppError::NotFound { status: 503, .. })));
        assert_eq!(*calls.borrow(), 1);
    }

    #[test]
    fn zero_attempts_still_tries_once() {
        let calls = RefCell::new(0);
        let fetch = scripted(vec![image("pug")], &calls);
        assert!(block_on(find_breed(breed_table().unwrap(), 0, fetch)).is_ok());
        assert_eq!(*calls.borrow(), 1);
    }
}
