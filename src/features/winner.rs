//! Fair winner selection
//!
//! The draw must not be predictable from earlier draws, so selection only
//! accepts generators marked [`CryptoRng`]. In the app this is `rand::rng()`,
//! a ChaCha-based generator reseeded from the operating system.

use rand::{CryptoRng, Rng};

use super::participants::Participant;

/// Pick one participant uniformly at random, returning its index and record
pub fn pick_winner<'a, R>(
    participants: &'a [Participant],
    rng: &mut R,
) -> Option<(usize, &'a Participant)>
where
    R: Rng + CryptoRng,
{
    if participants.is_empty() {
        return None;
    }
    // random_range samples without modulo bias
    let index = rng.random_range(0..participants.len());
    Some((index, &participants[index]))
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    fn roster(n: usize) -> Vec<Participant> {
        (0..n)
            .map(|i| Participant {
                id: format!("id-{i}"),
                name: format!("Person {i}"),
                email: format!("p{i}@example.com"),
                mobile: format!("98450{i:05}"),
            })
            .collect()
    }

    #[test]
    fn empty_list_has_no_winner() {
        let mut rng = StdRng::seed_from_u64(1);
        assert!(pick_winner(&[], &mut rng).is_none());
    }

    #[test]
    fn single_participant_always_wins() {
        let list = roster(1);
        let mut rng = StdRng::seed_from_u64(7);
        for _ in 0..20 {
            let (idx, p) = pick_winner(&list, &mut rng).unwrap();
            assert_eq!(idx, 0);
            assert_eq!(p.id, "id-0");
        }
    }

    #[test]
    fn winner_is_member_of_list() {
        let list = roster(13);
        let mut rng = StdRng::seed_from_u64(42);
        for _ in 0..500 {
            let (idx, p) = pick_winner(&list, &mut rng).unwrap();
            assert_eq!(&list[idx], p);
            assert!(list.contains(p));
        }
    }

    #[test]
    fn distribution_is_roughly_uniform() {
        let list = roster(5);
        let mut rng = StdRng::seed_from_u64(2026);
        let draws = 50_000;
        let mut counts = [0usize; 5];
        for _ in 0..draws {
            let (idx, _) = pick_winner(&list, &mut rng).unwrap();
            counts[idx] += 1;
        }
        let expected = draws as f64 / 5.0;
        for count in counts {
            let deviation = (count as f64 - expected).abs() / expected;
            assert!(deviation < 0.05, "counts {:?} deviate from uniform", counts);
        }
    }

    #[test]
    fn thread_rng_is_accepted() {
        let list = roster(3);
        assert!(pick_winner(&list, &mut rand::rng()).is_some());
    }
}
