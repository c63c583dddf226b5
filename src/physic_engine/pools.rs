#[cfg(debug_assertions)]
use log::debug;

use crate::physic_engine::config::ParticleOverflow;

/// Collection d'entités vivantes (fusées ou étincelles).
///
/// # Rôle
/// Insertion en fin, parcours dans l'ordre d'insertion, retrait pendant le
/// parcours. Le retrait passe par `Vec::retain_mut` (marquer puis compacter) :
/// chaque entité vivante est visitée exactement une fois par frame, aucune
/// n'est sautée quand une voisine disparaît.
#[derive(Debug, Clone)]
pub struct EntityPool<T> {
    entities: Vec<T>,
}

impl<T> Default for EntityPool<T> {
    fn default() -> Self {
        Self {
            entities: Vec::new(),
        }
    }
}

impl<T> EntityPool<T> {
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            entities: Vec::with_capacity(capacity),
        }
    }

    #[inline]
    pub fn push(&mut self, entity: T) {
        self.entities.push(entity);
    }

    /// Ajoute un lot d'entités en respectant le plafond `max`.
    ///
    /// Retourne le nombre d'entités perdues (anciennes évincées ou lot ignoré).
    pub fn extend_bounded(&mut self, batch: Vec<T>, max: usize, policy: ParticleOverflow) -> usize {
        let incoming = batch.len();
        let overflow = (self.entities.len() + incoming).saturating_sub(max);
        if overflow == 0 {
            self.entities.extend(batch);
            return 0;
        }

        match policy {
            ParticleOverflow::SkipBurst => {
                #[cfg(debug_assertions)]
                debug!("Pool full ({} / {}), burst of {} skipped", self.len(), max, incoming);
                incoming
            }
            ParticleOverflow::DropOldest => {
                // Le lot lui-même peut dépasser le plafond : on garde sa fin.
                let evicted = overflow.min(self.entities.len());
                self.entities.drain(..evicted);
                let skip = incoming.saturating_sub(max);
                self.entities.extend(batch.into_iter().skip(skip));
                #[cfg(debug_assertions)]
                debug!(
                    "Pool full: evicted {} oldest, truncated {} new (max {})",
                    evicted, skip, max
                );
                evicted + skip
            }
        }
    }

    /// Visite chaque entité une fois, dans l'ordre, et retire celles pour
    /// lesquelles `keep` renvoie `false`. Retourne le nombre de retraits.
    pub fn advance_all<F>(&mut self, mut keep: F) -> usize
    where
        F: FnMut(&mut T) -> bool,
    {
        let before = self.entities.len();
        self.entities.retain_mut(|entity| keep(entity));
        before - self.entities.len()
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.entities.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.entities.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, T> {
        self.entities.iter()
    }

    pub fn as_slice(&self) -> &[T] {
        &self.entities
    }

    pub fn clear(&mut self) {
        self.entities.clear();
    }
}

impl<'a, T> IntoIterator for &'a EntityPool<T> {
    type Item = &'a T;
    type IntoIter = std::slice::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.entities.iter()
    }
}
