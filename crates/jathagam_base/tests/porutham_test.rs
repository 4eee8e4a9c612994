//! Porutham scoring properties across all Moon placements.

use jathagam_base::porutham::ALL_PORUTHAMS;
use jathagam_base::{MatchBand, MoonSign, Nakshatra, Porutham, Rashi, classify, porutham};

fn all_signs() -> Vec<MoonSign> {
    // Every nakshatra paired with each rashi it overlaps
    let mut signs = Vec::new();
    for n in Nakshatra::all() {
        for pada in 0..4 {
            let lon = n.start_deg() + pada as f64 * 360.0 / 108.0 + 0.1;
            let s = MoonSign::from(&classify(lon));
            if !signs.contains(&s) {
                signs.push(s);
            }
        }
    }
    signs
}

#[test]
fn scores_bounded_for_every_pair() {
    let signs = all_signs();
    for &m in &signs {
        for &f in &signs {
            let r = porutham(m, f);
            assert_eq!(r.factors.len(), 10);
            assert!(r.total_points <= 37.0);
            assert!(r.total_points >= 0.0);
            for factor in &r.factors {
                assert!(factor.points <= factor.max_points, "{:?}", factor.porutham);
                assert!(factor.points >= 0.0);
            }
            assert!((0.0..=100.0).contains(&r.percentage));
            assert_eq!(r.band, MatchBand::from_percentage(r.percentage));
            assert_eq!(r.recommendation, r.band.recommendation());
        }
    }
}

#[test]
fn max_points_fixed() {
    let r = porutham(
        MoonSign { nakshatra: Nakshatra::Ashwini, rashi: Rashi::Mesha },
        MoonSign { nakshatra: Nakshatra::Hasta, rashi: Rashi::Kanya },
    );
    assert_eq!(r.max_points, 37.0);
    let maxima: Vec<f64> = ALL_PORUTHAMS.iter().map(|p| p.max_points()).collect();
    assert_eq!(maxima, vec![3.0, 6.0, 2.0, 3.0, 4.0, 7.0, 5.0, 2.0, 3.0, 2.0]);
}

#[test]
fn ashwini_male_hasta_female() {
    // Distance 12: Dina 3 (12 mod 9 = 3), Gana Deva/Deva 6, Mahendra 0,
    // Stree 0, Yoni Horse/Elephant 2, Rasi |6-1| = 5 → 7, lords Mars/Mercury 1,
    // Vasya Mesha→Kanya 0, Rajju Pada/Kanta 3, Vedha none 2.
    let r = porutham(
        MoonSign { nakshatra: Nakshatra::Ashwini, rashi: Rashi::Mesha },
        MoonSign { nakshatra: Nakshatra::Hasta, rashi: Rashi::Kanya },
    );
    let pts = |p| r.factor(p).map(|f| f.points).unwrap_or(-1.0);
    assert_eq!(pts(Porutham::Dina), 3.0);
    assert_eq!(pts(Porutham::Gana), 6.0);
    assert_eq!(pts(Porutham::Mahendra), 0.0);
    assert_eq!(pts(Porutham::StreeDeergha), 0.0);
    assert_eq!(pts(Porutham::Yoni), 2.0);
    assert_eq!(pts(Porutham::Rasi), 7.0);
    assert_eq!(pts(Porutham::RasiAdhipathi), 1.0);
    assert_eq!(pts(Porutham::Vasya), 0.0);
    assert_eq!(pts(Porutham::Rajju), 3.0);
    assert_eq!(pts(Porutham::Vedha), 2.0);
    assert_eq!(r.total_points, 24.0);
    assert_eq!(r.band, MatchBand::Good);
}

#[test]
fn dina_ignores_direction() {
    let bharani = MoonSign { nakshatra: Nakshatra::Bharani, rashi: Rashi::Mesha };
    let ashwini = MoonSign { nakshatra: Nakshatra::Ashwini, rashi: Rashi::Mesha };
    let dina = |m, f| porutham(m, f).factor(Porutham::Dina).map(|f| f.points);
    assert_eq!(dina(bharani, ashwini), Some(1.5));
    assert_eq!(dina(ashwini, bharani), Some(1.5));
}
